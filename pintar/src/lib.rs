// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # pintar
//!
//! Paint terminal text with ANSI escape sequences, and do arithmetic on colors.
//!
//! There are two halves to this crate:
//!
//! 1. A color algebra ([`color`]): [`RgbColor`], [`HslColor`], [`HexColor`] and
//!    [`AnsiValue`] all implement [`TransformColor`], so any of them can be converted
//!    into any other, serialized as CSS, snapped to the 256-color palette, and lightened
//!    / darkened / saturated / desaturated / tinted / shaded. [`Color`] is the closed
//!    sum of all four, and [`parse_color`] turns a textual spec (`#F00`, `rgb(..)`,
//!    `hsla(..)`, `"196"`) into one.
//! 2. A styled text engine ([`dye`]): a [`Dye`] wraps a source string with an optional
//!    foreground color, background color and style ([`DyeStyle`]). It renders to a
//!    string of escape sequences that is safe to nest inside another [`Dye`] (the outer
//!    colors are restored when the inner text ends), and it can be measured, iterated and
//!    sliced by its *visible* characters, never cutting an escape sequence in half.
//!
//! The [`factory`] module has the convenience layer on top: [`Brush`] precomputes the
//! sequences to paint many strings the same way, [`Stencil`] holds a text to paint later,
//! and [`palette_table`] shows all 256 palette colors.
//!
//! # Example usage
//!
//! ```rust
//! use pintar::*;
//!
//! let it = colorize("hi", (0, 255, 0), None::<&str>, "bold").unwrap();
//! assert_eq!(
//!     it,
//!     "\x1b[0m\x1b[38;2;0;255;0m\x1b[49m\x1b[1mhi\x1b[0m\x1b[39m\x1b[49m\x1b[22m"
//! );
//!
//! let red = HexColor::try_new("#F00").unwrap();
//! assert_eq!(red.to_ansi_index(), 196);
//! assert_eq!(red.to_long_hex(), "#FF0000");
//! assert_eq!(red.darken(0.1).to_css(), "#cc0000");
//! ```
//!
//! # Logging
//!
//! The library only emits [`tracing`] events (mostly at `debug` and `trace` level); it
//! never installs a subscriber. The `pintar` binary installs one on stderr, controlled by
//! its `--log-level` flag.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod common;
pub mod dye;
pub mod factory;

// Re-export.
pub use color::*;
pub use common::*;
pub use dye::*;
pub use factory::*;

/// Render `text` with the given colors and style in one call. Each argument accepts
/// anything [`Dye::try_new`] accepts, and [None] leaves that attribute unset.
///
/// # Errors
///
/// Returns a [`PintarError`] if a color or the style can't be parsed.
pub fn colorize(
    text: &str,
    fore: impl TryIntoColor,
    back: impl TryIntoColor,
    style: impl TryIntoStyle,
) -> Result<String, PintarError> {
    Dye::try_new(text, fore, back, style).map(String::from)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_colorize_matches_dye() {
        let it = colorize("abc", "#00F", 236, "italic+underline").unwrap();
        let dye = Dye::try_new("abc", "#00F", 236, "italic+underline").unwrap();
        assert_eq!(it, dye.rendered());
        assert!(it.contains("\x1b[38;2;0;0;255m"));
        assert!(it.contains("\x1b[48;5;236m"));
        assert!(it.contains("\x1b[3;4m"));
    }

    #[test]
    fn test_colorize_plain() {
        let it = colorize("abc", None::<&str>, None::<&str>, None::<&str>).unwrap();
        assert_eq!(it, "\x1b[0m\x1b[39m\x1b[49m\x1b[22mabc\x1b[0m\x1b[39m\x1b[49m\x1b[22m");
    }

    #[test]
    fn test_colorize_errors() {
        assert!(matches!(
            colorize("x", "#12", None::<&str>, None::<&str>),
            Err(PintarError::ColorFormat(ColorFormatError::InvalidHexLength { .. }))
        ));
        assert!(matches!(
            colorize("x", None::<&str>, None::<&str>, "blink"),
            Err(PintarError::StyleFormat(StyleFormatError::UnknownName { .. }))
        ));
        assert!(matches!(
            colorize("x", 300, None::<&str>, None::<&str>),
            Err(PintarError::ColorFormat(ColorFormatError::PaletteIndexOutOfRange { .. }))
        ));
    }
}
