// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error taxonomy. Every error is raised synchronously by the call that receives the bad
//! input, never deferred to render time.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`] in
/// binaries and other report level code. Library functions return the typed errors
/// below, which convert into a [`miette::Report`] via `?`.
pub type PintarResult<T> = miette::Result<T>;

/// A color specification (hex string, CSS function, palette index string, or tuple)
/// could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ColorFormatError {
    #[error("'{input}' is not a valid hex color: it must start with '#'")]
    #[diagnostic(
        code(pintar::color::hex_marker),
        help("Use one of #RGB, #RGBA, #RRGGBB or #RRGGBBAA")
    )]
    MissingHexMarker { input: String },

    #[error("'{input}' contains non hexadecimal characters")]
    #[diagnostic(
        code(pintar::color::hex_digits),
        help("Only 0-9, a-f and A-F are allowed after the '#'")
    )]
    InvalidHexDigits { input: String },

    #[error("'{input}' has {digit_count} hex digits, expected 3, 4, 6 or 8")]
    #[diagnostic(
        code(pintar::color::hex_length),
        help("Use one of #RGB, #RGBA, #RRGGBB or #RRGGBBAA")
    )]
    InvalidHexLength { input: String, digit_count: usize },

    #[error("'{input}' is not a valid CSS color function")]
    #[diagnostic(
        code(pintar::color::css_function),
        help("Expected rgb(r, g, b), rgba(r, g, b, a), hsl(h, s%, l%) or hsla(h, s%, l%, a)")
    )]
    InvalidCssFunction { input: String },

    #[error("'{input}' is not a palette index in the range 0-255")]
    #[diagnostic(
        code(pintar::color::palette_index),
        help("Palette indices are integers between 0 and 255")
    )]
    PaletteIndexOutOfRange { input: String },

    #[error("'{input}' is not a recognized color spec")]
    #[diagnostic(
        code(pintar::color::unrecognized),
        help("Use a hex color (#F00), a palette index (0-255), rgb(..), rgba(..), hsl(..) or hsla(..)")
    )]
    UnrecognizedSpec { input: String },

    #[error("tuple must have 3 or 4 values, got {len}")]
    #[diagnostic(code(pintar::color::tuple_len))]
    InvalidTupleLength { len: usize },
}

/// A style specification (named style, `+` joined names, numeric code, or list of
/// codes) could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum StyleFormatError {
    #[error("'{token}' is not a known style")]
    #[diagnostic(
        code(pintar::style::unknown_name),
        help("Known styles are: bold, italic, underline, strikethrough")
    )]
    UnknownName { token: String },

    #[error("{code} is not a supported style code")]
    #[diagnostic(
        code(pintar::style::unknown_code),
        help("Supported SGR style codes are: 1, 3, 4, 9")
    )]
    UnknownCode { code: i64 },

    #[error("style spec is empty")]
    #[diagnostic(code(pintar::style::empty))]
    Empty,
}

/// An explicit ANSI palette index is outside of 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("ANSI index {index} is out of range, it must be between 0 and 255")]
#[diagnostic(code(pintar::color::index_range))]
pub struct ColorIndexRangeError {
    pub index: i64,
}

/// Union of all the errors in this crate, for call sites that can fail in more than one
/// way (eg: [`crate::colorize`] parses colors and a style).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum PintarError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ColorFormat(#[from] ColorFormatError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    StyleFormat(#[from] StyleFormatError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ColorIndexRange(#[from] ColorIndexRangeError),
}
