// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::Chars,
          sync::OnceLock};

use super::{cell_map::{CellMap, DyeSlice},
            sgr_code::placeholders};
use crate::{Color, DyeStyle, PaintStyle, PintarError, SgrCode, TryIntoColor,
            TryIntoStyle};

/// The main struct that we have to consider is `Dye`. It wraps a `source` string and a
/// [`PaintStyle`] (foreground, background, style), and renders them into a string with
/// embedded ANSI escape sequences.
///
/// - Length, iteration and slicing work on the *visible* characters only. Escape
///   sequences are never counted, and never dropped by a slice.
/// - A `Dye` never changes after construction. Slicing and [`Dye::restyle`] return a
///   new one.
/// - The rendered string always starts with a full reset and ends with a full reset
///   followed by the neutral foreground / background / style resets, so that adjacent
///   and nested values don't bleed into each other.
///
/// # Example usage:
///
/// ```rust
/// use pintar::*;
///
/// let it = Dye::new("hello", PaintStyle::new().with_fore((255, 0, 0)));
/// assert_eq!(it.len(), 5);
/// assert_eq!(it.clean(), "hello");
/// assert_eq!(it.slice(1..4).clean(), "ell");
///
/// // Nested values inherit the outer color.
/// let outer = dye!(format!("[{it}]"), fore: 196, style: "bold").unwrap();
/// assert_eq!(outer.clean(), "[hello]");
/// println!("{outer}");
/// ```
#[derive(Debug, Clone)]
pub struct Dye {
    source: String,
    paint: PaintStyle,
    rendered: String,
    cells: OnceLock<CellMap>,
}

mod constructor {
    use super::*;

    impl Dye {
        #[must_use]
        pub fn new(source: impl Into<String>, paint: PaintStyle) -> Self {
            let source = source.into();
            let rendered = render(&source, &paint);
            Self {
                source,
                paint,
                rendered,
                cells: OnceLock::new(),
            }
        }

        /// No attributes, only the neutral wrapping.
        #[must_use]
        pub fn plain(source: impl Into<String>) -> Self { Self::new(source, PaintStyle::new()) }

        /// Build the [`PaintStyle`] from loosely typed arguments, see [`TryIntoColor`]
        /// and [`TryIntoStyle`] for what is accepted.
        ///
        /// # Errors
        ///
        /// Returns a [`PintarError`] if a color or the style can't be parsed.
        pub fn try_new(
            source: impl Into<String>,
            fore: impl TryIntoColor,
            back: impl TryIntoColor,
            style: impl TryIntoStyle,
        ) -> std::result::Result<Self, PintarError> {
            let paint = PaintStyle::new().fore(fore)?.back(back)?.style(style)?;
            Ok(Self::new(source, paint))
        }

        /// Same source, with the attributes of `paint` where it has them and the current
        /// ones otherwise.
        #[must_use]
        pub fn restyle(&self, paint: &PaintStyle) -> Self {
            Self::new(self.source.clone(), self.paint.merge(paint))
        }
    }

    /// Placeholder then replace:
    /// 1. `placeholders + source + reset`.
    /// 2. Every occurrence of a placeholder whose attribute is set is replaced with the
    ///    real code. This includes the placeholders left behind by nested values, which
    ///    is how they pick up the outer attributes after their own reset.
    /// 3. Wrap in `reset ... placeholders`.
    fn render(source: &str, paint: &PaintStyle) -> String {
        let mut acc = format!("{}{source}{}", placeholders::ALL, placeholders::RESET);

        if let Some(fore) = &paint.fore {
            let code = SgrCode::Foreground(&fore.escape_payload()).to_string();
            acc = acc.replace(placeholders::FOREGROUND, &code);
        }
        if let Some(back) = &paint.back {
            let code = SgrCode::Background(&back.escape_payload()).to_string();
            acc = acc.replace(placeholders::BACKGROUND, &code);
        }
        if let Some(style) = &paint.style {
            let code = SgrCode::Style(style).to_string();
            acc = acc.replace(placeholders::STYLE, &code);
        }

        format!("{}{acc}{}", placeholders::RESET, placeholders::ALL)
    }
}

mod accessors {
    use super::*;

    impl Dye {
        #[must_use]
        pub fn source(&self) -> &str { &self.source }

        #[must_use]
        pub fn paint(&self) -> &PaintStyle { &self.paint }

        #[must_use]
        pub fn fore(&self) -> Option<&Color> { self.paint.fore.as_ref() }

        #[must_use]
        pub fn back(&self) -> Option<&Color> { self.paint.back.as_ref() }

        #[must_use]
        pub fn style(&self) -> Option<&DyeStyle> { self.paint.style.as_ref() }

        /// The string with the escape sequences.
        #[must_use]
        pub fn rendered(&self) -> &str { &self.rendered }

        /// The visible characters, without any escape sequences.
        #[must_use]
        pub fn clean(&self) -> &str { self.cells().clean() }

        /// Number of visible characters.
        #[must_use]
        pub fn len(&self) -> usize { self.cells().len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.cells().is_empty() }

        /// The visible characters, in order. Every call starts over.
        pub fn iter(&self) -> Chars<'_> { self.clean().chars() }

        /// Computed on first use, then cached.
        pub(super) fn cells(&self) -> &CellMap {
            self.cells.get_or_init(|| CellMap::classify(&self.rendered))
        }
    }

    impl<'a> IntoIterator for &'a Dye {
        type Item = char;
        type IntoIter = Chars<'a>;

        fn into_iter(self) -> Self::IntoIter { self.iter() }
    }
}

mod slicing {
    use super::*;

    impl Dye {
        /// Select visible characters, eg: `1..4`, `-2..`, `..`, or a [`DyeSlice`] with a
        /// step. Negative bounds count from the end. Every escape sequence of this value
        /// is kept, and the result is wrapped again with the same attributes. A negative
        /// step only chooses which cells are kept, they stay in their original order.
        #[must_use]
        pub fn slice(&self, slice: impl Into<DyeSlice>) -> Self {
            let extracted = self.cells().extract(&self.rendered, slice.into());
            Self::new(extracted, self.paint.clone())
        }

        /// The visible character at `index`, same as `slice(index..index + 1)`. So `-1`
        /// is always empty, and `-2` is the next to last character.
        #[must_use]
        pub fn at(&self, index: isize) -> Self { self.slice(DyeSlice::at(index)) }
    }
}

mod sequences {
    use super::*;

    impl Dye {
        /// The codes a [`Dye`] with `paint` starts its source with. Unset attributes are
        /// neutral resets.
        #[must_use]
        pub fn start_sequence(paint: &PaintStyle) -> String { paint.start_sequence() }

        /// The full reset.
        #[must_use]
        pub fn end_sequence() -> &'static str { placeholders::RESET }

        /// Write [`Dye::start_sequence`] to stdout, so everything printed after it is
        /// painted until [`Dye::print_end`].
        pub fn print_start(paint: &PaintStyle) {
            print!("{}", Self::start_sequence(paint));
        }

        pub fn print_end() {
            print!("{}", Self::end_sequence());
        }
    }
}

mod display_trait_impl {
    use super::*;

    impl Display for Dye {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.pad(&self.rendered) }
    }

    impl From<Dye> for String {
        fn from(value: Dye) -> Self { value.rendered }
    }

    impl AsRef<str> for Dye {
        fn as_ref(&self) -> &str { &self.rendered }
    }

    /// The cache is derived state, so it does not take part.
    impl PartialEq for Dye {
        fn eq(&self, other: &Self) -> bool {
            self.source == other.source
                && self.paint == other.paint
                && self.rendered == other.rendered
        }
    }
}

/// Build a [`Dye`] from loosely typed, named arguments. Any of `fore`, `back` and
/// `style` can be left out. Returns `Result<Dye, PintarError>`.
///
/// ```rust
/// use pintar::*;
///
/// let it = dye!("hi", fore: "#0F0", back: (0, 0, 0), style: "bold").unwrap();
/// assert_eq!(it.clean(), "hi");
///
/// let err = dye!("hi", style: "blink").unwrap_err();
/// assert!(matches!(err, PintarError::StyleFormat(_)));
/// ```
#[macro_export]
macro_rules! dye {
    (@apply $paint:expr, fore, $value:expr) => {
        $paint.fore($value).map_err($crate::PintarError::from)
    };
    (@apply $paint:expr, back, $value:expr) => {
        $paint.back($value).map_err($crate::PintarError::from)
    };
    (@apply $paint:expr, style, $value:expr) => {
        $paint.style($value).map_err($crate::PintarError::from)
    };
    ($source:expr $(, $key:ident : $value:expr)* $(,)?) => {{
        let paint: ::core::result::Result<$crate::PaintStyle, $crate::PintarError> =
            ::core::result::Result::Ok($crate::PaintStyle::new());
        $(
            let paint = paint.and_then(|it| $crate::dye!(@apply it, $key, $value));
        )*
        paint.map(|it| $crate::Dye::new($source, it))
    }};
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroIsize;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{AnsiValue, HexColor, RgbColor, StyleAttrib};

    const WRAP_START: &str = "\x1b[0m";
    const WRAP_END: &str = "\x1b[0m\x1b[39m\x1b[49m\x1b[22m";

    #[test]
    fn test_render_without_attributes() {
        let it = Dye::plain("hi");
        assert_eq!(
            it.rendered(),
            format!("{WRAP_START}\x1b[39m\x1b[49m\x1b[22mhi{WRAP_END}")
        );
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_render_with_all_attributes() {
        let it = Dye::new(
            "hi",
            PaintStyle::new()
                .with_fore((0, 255, 0))
                .with_back(AnsiValue::new(236))
                .with_style([StyleAttrib::Bold, StyleAttrib::Italic]),
        );
        assert_eq!(
            it.rendered(),
            format!("{WRAP_START}\x1b[38;2;0;255;0m\x1b[48;5;236m\x1b[1;3mhi{WRAP_END}")
        );
        assert_eq!(it.to_string(), it.rendered());
    }

    #[test]
    fn test_rendered_always_ends_with_reset_and_placeholders() {
        let it = dye!("x", fore: "#F00", back: 1, style: 4).unwrap();
        assert!(it.rendered().starts_with(WRAP_START));
        assert!(it.rendered().ends_with(WRAP_END));
    }

    #[test]
    fn test_nested_dye_inherits_outer_attributes() {
        let inner = Dye::new("in", PaintStyle::new().with_fore(AnsiValue::new(1)));
        let outer = Dye::new(
            format!("a{inner}b"),
            PaintStyle::new().with_fore(AnsiValue::new(2)),
        );
        let expected = [
            "\x1b[0m",
            "\x1b[38;5;2m\x1b[49m\x1b[22m",
            "a",
            "\x1b[0m\x1b[38;5;1m\x1b[49m\x1b[22min\x1b[0m",
            // The inner trailing placeholder now restores the outer foreground.
            "\x1b[38;5;2m\x1b[49m\x1b[22m",
            "b",
            "\x1b[0m",
            "\x1b[39m\x1b[49m\x1b[22m",
        ]
        .concat();
        assert_eq!(outer.rendered(), expected);
        assert_eq!(outer.clean(), "ainb");
    }

    #[test]
    fn test_len_counts_visible_characters_only() {
        let it = dye!("abc", fore: (255, 0, 0)).unwrap();
        assert_eq!(it.len(), 3);
        assert!(it.rendered().len() > 3);
        assert!(!it.is_empty());
        assert!(Dye::plain("").is_empty());
    }

    #[test]
    fn test_iter_is_restartable() {
        let it = dye!("abc", style: "underline").unwrap();
        assert_eq!(it.iter().collect::<String>(), "abc");
        assert_eq!(it.iter().rev().collect::<String>(), "cba");
        let mut acc = String::new();
        for ch in &it {
            acc.push(ch);
        }
        assert_eq!(acc, "abc");
    }

    #[test]
    fn test_slice_clean_matches_clean_slice() {
        let it = dye!("hello", fore: (255, 0, 0)).unwrap();
        assert_eq!(it.slice(1..4).clean(), "ell");
        assert_eq!(it.slice(-3..).clean(), "llo");
        assert_eq!(it.slice(..2).clean(), "he");
        assert_eq!(it.slice(..).clean(), "hello");
        let reversed = DyeSlice::from(..).stepped(NonZeroIsize::new(-1).unwrap());
        assert_eq!(it.slice(reversed).clean(), "hello");
        let every_other = DyeSlice::from(..).stepped(NonZeroIsize::new(-2).unwrap());
        assert_eq!(it.slice(every_other).clean(), "hlo");
    }

    #[test]
    fn test_display_honors_width_and_fill() {
        let it = Dye::plain("x");
        let width = it.rendered().chars().count() + 2;
        assert_eq!(format!("{it:>width$}"), format!("  {}", it.rendered()));
        assert_eq!(format!("{it:*<width$}"), format!("{}**", it.rendered()));
        assert_eq!(format!("{it}"), it.rendered());
    }

    #[test]
    fn test_slice_keeps_attributes_and_escapes() {
        let it = dye!("hello", fore: (255, 0, 0), style: "bold").unwrap();
        let sliced = it.slice(1..4);
        assert_eq!(sliced.paint(), it.paint());
        assert_eq!(sliced.fore(), Some(&Color::from((255, 0, 0))));
        assert_eq!(sliced.style().map(ToString::to_string), Some("1".into()));
        let escape_count = |text: &str| text.matches("\x1b[").count();
        assert!(escape_count(sliced.rendered()) >= escape_count(it.rendered()));
        assert!(sliced.source().contains("\x1b[38;2;255;0;0m"));
    }

    #[test]
    fn test_slice_never_emits_unterminated_escapes() {
        let it = dye!("hello world", fore: "#123456", back: 200, style: "bold+italic")
            .unwrap();
        for start in -12..12 {
            for stop in -12..12 {
                let rendered = it.slice(start..stop).rendered().to_owned();
                for (index, _) in rendered.match_indices("\x1b[") {
                    assert!(rendered[index..].contains('m'), "{rendered:?}");
                }
            }
        }
    }

    #[test_case(0, "h")]
    #[test_case(4, "o")]
    #[test_case(-2, "l")]
    #[test_case(-1, "")]
    #[test_case(5, "")]
    fn test_at(index: isize, expected: &str) {
        let it = dye!("hello", fore: 42).unwrap();
        assert_eq!(it.at(index).clean(), expected);
    }

    #[test]
    fn test_restyle() {
        let it = dye!("hi", fore: 1, style: "bold").unwrap();
        let restyled = it.restyle(&PaintStyle::new().with_back((0, 0, 0)));
        assert_eq!(restyled.fore(), it.fore());
        assert_eq!(restyled.back(), Some(&Color::from((0, 0, 0))));
        assert_eq!(restyled.style(), it.style());
        assert_eq!(restyled.source(), "hi");
        assert_eq!(it.back(), None);
    }

    #[test]
    fn test_start_and_end_sequences() {
        let paint = PaintStyle::new().with_fore(HexColor::try_new("#F00").unwrap());
        assert_eq!(
            Dye::start_sequence(&paint),
            "\x1b[38;2;255;0;0m\x1b[49m\x1b[22m"
        );
        assert_eq!(Dye::end_sequence(), "\x1b[0m");
    }

    #[test]
    fn test_try_new_errors() {
        assert!(matches!(
            Dye::try_new("x", "#12", None::<&str>, None::<&str>),
            Err(PintarError::ColorFormat(_))
        ));
        assert!(matches!(
            Dye::try_new("x", None::<&str>, None::<&str>, "blink"),
            Err(PintarError::StyleFormat(_))
        ));
        let ok = Dye::try_new("x", "not a color", RgbColor::new(1, 2, 3), 9).unwrap();
        assert_eq!(ok.fore(), None);
        assert_eq!(ok.back(), Some(&Color::Rgb(RgbColor::new(1, 2, 3))));
    }

    #[test]
    fn test_hi_green_scenario() {
        let it = dye!("hi", fore: RgbColor::new(0, 255, 0)).unwrap();
        assert_eq!(it.len(), 2);
        assert_eq!(it.clean(), "hi");
        assert_eq!(String::from(it.clone()), it.rendered());
    }
}
