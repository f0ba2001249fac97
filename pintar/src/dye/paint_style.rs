// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, Color, ColorFormatError, DyeStyle, HexColor, HslColor,
            RgbColor, SgrCode, StyleFormatError, TryIntoStyle, looks_like_color_spec,
            parse_color};

/// The three optional attributes of a [`crate::Dye`]: foreground color, background
/// color and style.
///
/// # Example usage:
///
/// ```rust
/// use pintar::*;
///
/// fn build() -> Result<PaintStyle, PintarError> {
///     Ok(PaintStyle::new().fore("#F00")?.back((0, 0, 0))?.style("bold+italic")?)
/// }
///
/// let paint = build().unwrap();
/// assert_eq!(paint.start_sequence(), "\x1b[38;2;255;0;0m\x1b[48;2;0;0;0m\x1b[1;3m");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaintStyle {
    pub fore: Option<Color>,
    pub back: Option<Color>,
    pub style: Option<DyeStyle>,
}

mod paint_style_impl {
    use super::*;

    impl PaintStyle {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        /// # Errors
        ///
        /// Returns a [`ColorFormatError`] if `arg` is a malformed color spec. Arguments
        /// that aren't shaped like a color spec leave the foreground unset.
        pub fn fore(mut self, arg: impl TryIntoColor) -> Result<Self, ColorFormatError> {
            self.fore = arg.try_into_color()?;
            Ok(self)
        }

        /// # Errors
        ///
        /// Same as [`PaintStyle::fore`].
        pub fn back(mut self, arg: impl TryIntoColor) -> Result<Self, ColorFormatError> {
            self.back = arg.try_into_color()?;
            Ok(self)
        }

        /// # Errors
        ///
        /// Returns a [`StyleFormatError`] if `arg` is not a valid style spec.
        pub fn style(mut self, arg: impl TryIntoStyle) -> Result<Self, StyleFormatError> {
            self.style = arg.try_into_style()?;
            Ok(self)
        }

        #[must_use]
        pub fn with_fore(mut self, color: impl Into<Color>) -> Self {
            self.fore = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_back(mut self, color: impl Into<Color>) -> Self {
            self.back = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_style(mut self, style: impl Into<DyeStyle>) -> Self {
            self.style = Some(style.into());
            self
        }

        /// The attributes of `other` where it has them, the ones of `self` otherwise.
        #[must_use]
        pub fn merge(&self, other: &PaintStyle) -> PaintStyle {
            PaintStyle {
                fore: other.fore.clone().or_else(|| self.fore.clone()),
                back: other.back.clone().or_else(|| self.back.clone()),
                style: other.style.clone().or_else(|| self.style.clone()),
            }
        }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.fore.is_none() && self.back.is_none() && self.style.is_none()
        }

        /// The foreground, background and style codes, in that order. An unset attribute
        /// is emitted as its neutral reset.
        #[must_use]
        pub fn start_sequence(&self) -> String {
            let fore = self.fore.as_ref().map(Color::escape_payload);
            let back = self.back.as_ref().map(Color::escape_payload);
            let fore = fore.as_deref().map_or(SgrCode::ResetForeground, SgrCode::Foreground);
            let back = back.as_deref().map_or(SgrCode::ResetBackground, SgrCode::Background);
            let style = self.style.as_ref().map_or(SgrCode::ResetIntensity, SgrCode::Style);
            format!("{fore}{back}{style}")
        }
    }
}

/// Anything that can be passed as a foreground or background color.
///
/// Color values and tuples always convert. Strings are parsed with
/// [`crate::parse_color`] when they are shaped like a color spec, and are ignored (no
/// color, not an error) otherwise. Integers are palette indices.
pub trait TryIntoColor {
    /// # Errors
    ///
    /// Returns a [`ColorFormatError`] if a color spec is malformed or a palette index is
    /// out of range.
    fn try_into_color(self) -> Result<Option<Color>, ColorFormatError>;
}

mod try_into_color_impl {
    use super::*;

    macro_rules! infallible {
        ($($ty:ty),* $(,)?) => {
            $(
                impl TryIntoColor for $ty {
                    fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
                        Ok(Some(Color::from(self)))
                    }
                }
            )*
        };
    }

    infallible!(Color, RgbColor, HslColor, HexColor, AnsiValue, (u8, u8, u8));

    impl TryIntoColor for (u8, u8, u8, f64) {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            Ok(Some(Color::Rgb(self.into())))
        }
    }

    impl TryIntoColor for &[u8] {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            RgbColor::from_tuple(self).map(|it| Some(Color::Rgb(it)))
        }
    }

    impl TryIntoColor for &str {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            if !looks_like_color_spec(self) {
                tracing::debug!(message = "ignore color argument", arg = %self);
                return Ok(None);
            }
            parse_color(self).map(Some)
        }
    }

    impl TryIntoColor for String {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            self.as_str().try_into_color()
        }
    }

    impl TryIntoColor for &String {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            self.as_str().try_into_color()
        }
    }

    impl TryIntoColor for u8 {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            Ok(Some(Color::Ansi(AnsiValue::new(self))))
        }
    }

    impl TryIntoColor for i64 {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            AnsiValue::try_from(self)
                .map(|it| Some(Color::Ansi(it)))
                .map_err(|error| ColorFormatError::PaletteIndexOutOfRange {
                    input: error.index.to_string(),
                })
        }
    }

    impl TryIntoColor for i32 {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            i64::from(self).try_into_color()
        }
    }

    /// [None] means "no color", and is never an error.
    impl<T: TryIntoColor> TryIntoColor for Option<T> {
        fn try_into_color(self) -> Result<Option<Color>, ColorFormatError> {
            match self {
                Some(it) => it.try_into_color(),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::StyleAttrib;

    #[test]
    fn test_unset_attributes_are_neutral_resets() {
        assert_eq!(
            PaintStyle::new().start_sequence(),
            "\x1b[39m\x1b[49m\x1b[22m"
        );
    }

    #[test]
    fn test_start_sequence() {
        let paint = PaintStyle::new()
            .with_fore(AnsiValue::new(196))
            .with_style([StyleAttrib::Underline]);
        assert_eq!(
            paint.start_sequence(),
            "\x1b[38;5;196m\x1b[49m\x1b[4m"
        );
    }

    #[test]
    fn test_builder() {
        let paint = PaintStyle::new()
            .fore("#0F0")
            .unwrap()
            .back(42)
            .unwrap()
            .style("bold")
            .unwrap();
        assert_eq!(
            paint.fore,
            Some(Color::Hex(HexColor::try_new("#00FF00").unwrap()))
        );
        assert_eq!(paint.back, Some(Color::Ansi(AnsiValue::new(42))));
        assert_eq!(paint.style, Some(StyleAttrib::Bold.into()));
    }

    #[test]
    fn test_merge() {
        let base = PaintStyle::new()
            .with_fore((1, 2, 3))
            .with_style(StyleAttrib::Italic);
        let update = PaintStyle::new().with_fore((4, 5, 6)).with_back((7, 8, 9));
        let merged = base.merge(&update);
        assert_eq!(merged.fore, Some(Color::from((4, 5, 6))));
        assert_eq!(merged.back, Some(Color::from((7, 8, 9))));
        assert_eq!(merged.style, Some(StyleAttrib::Italic.into()));
        assert_eq!(base.merge(&PaintStyle::new()), base);
    }

    #[test_case("red")]
    #[test_case("")]
    #[test_case("bold")]
    fn test_unshaped_strings_are_ignored(arg: &str) {
        assert_eq!(arg.try_into_color(), Ok(None));
    }

    #[test]
    fn test_malformed_specs_are_errors() {
        assert_eq!(
            "#12".try_into_color(),
            Err(ColorFormatError::InvalidHexLength {
                input: "#12".into(),
                digit_count: 2
            })
        );
        assert_eq!(
            300_i32.try_into_color(),
            Err(ColorFormatError::PaletteIndexOutOfRange {
                input: "300".into()
            })
        );
        assert_eq!(
            [1_u8, 2].as_slice().try_into_color(),
            Err(ColorFormatError::InvalidTupleLength { len: 2 })
        );
    }

    #[test]
    fn test_options_and_tuples() {
        assert_eq!(None::<RgbColor>.try_into_color(), Ok(None));
        assert_eq!(
            Some((0_u8, 255_u8, 0_u8)).try_into_color(),
            Ok(Some(Color::from((0, 255, 0))))
        );
        assert_eq!(
            (1_u8, 2_u8, 3_u8, 0.5).try_into_color(),
            Ok(Some(Color::Rgb(RgbColor::new(1, 2, 3).with_alpha(0.5))))
        );
    }
}
