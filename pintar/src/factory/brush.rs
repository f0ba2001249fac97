// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Dye, PaintStyle, PintarError, TryIntoColor, TryIntoStyle};

/// Paint many strings the same way. The start and end sequences are computed once, in
/// [`Brush::load`], and then reused for every [`Brush::paint`] call.
///
/// # Example usage:
///
/// ```rust
/// use pintar::*;
///
/// let brush = Brush::try_load("#F00", None::<&str>, "bold").unwrap();
/// let paint = brush.into_fn();
/// assert_eq!(paint("x"), "\x1b[38;2;255;0;0m\x1b[49m\x1b[1mx\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brush {
    start: String,
    end: &'static str,
}

impl Brush {
    #[must_use]
    pub fn load(paint: &PaintStyle) -> Self {
        Self {
            start: Dye::start_sequence(paint),
            end: Dye::end_sequence(),
        }
    }

    /// # Errors
    ///
    /// Returns a [`PintarError`] if a color or the style can't be parsed.
    pub fn try_load(
        fore: impl TryIntoColor,
        back: impl TryIntoColor,
        style: impl TryIntoStyle,
    ) -> Result<Self, PintarError> {
        let paint = PaintStyle::new().fore(fore)?.back(back)?.style(style)?;
        Ok(Self::load(&paint))
    }

    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        let mut acc = String::with_capacity(self.start.len() + text.len() + self.end.len());
        acc.push_str(&self.start);
        acc.push_str(text);
        acc.push_str(self.end);
        acc
    }

    /// A closure that does what [`Brush::paint`] does.
    #[must_use]
    pub fn into_fn(self) -> impl Fn(&str) -> String { move |text: &str| self.paint(text) }

    #[must_use]
    pub fn start(&self) -> &str { &self.start }

    #[must_use]
    pub fn end(&self) -> &str { self.end }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::AnsiValue;

    #[test]
    fn test_paint_reuses_sequences() {
        let brush = Brush::load(&PaintStyle::new().with_back(AnsiValue::new(236)));
        assert_eq!(brush.start(), "\x1b[39m\x1b[48;5;236m\x1b[22m");
        assert_eq!(brush.end(), "\x1b[0m");
        assert_eq!(brush.paint("a"), format!("{}a\x1b[0m", brush.start()));
        assert_eq!(brush.paint("bc"), format!("{}bc\x1b[0m", brush.start()));
    }

    #[test]
    fn test_empty_brush_is_neutral() {
        let paint = Brush::load(&PaintStyle::new()).into_fn();
        assert_eq!(paint("x"), "\x1b[39m\x1b[49m\x1b[22mx\x1b[0m");
    }

    #[test]
    fn test_try_load_errors() {
        assert!(matches!(
            Brush::try_load("rgb(1, 2)", None::<&str>, None::<&str>),
            Err(PintarError::ColorFormat(_))
        ));
        assert!(matches!(
            Brush::try_load(None::<&str>, None::<&str>, 7),
            Err(PintarError::StyleFormat(_))
        ));
    }
}
