// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::DyeStyle;

/// The escape sequences that a [`crate::Dye`] is made of.
///
/// Color payloads are the part after `38;` / `48;`: either `r;g;b` (which lowers to the
/// truecolor `38;2;r;g;b` form) or an alphanumeric only palette index `N` (which lowers
/// to the `38;5;N` form). See [`crate::Color::escape_payload`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SgrCode<'a> {
    Reset,
    ResetForeground,
    ResetBackground,
    ResetIntensity,
    Foreground(&'a str),
    Background(&'a str),
    Style(&'a DyeStyle),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    /// Whether `payload` is a bare palette index rather than `r;g;b`.
    #[must_use]
    pub fn is_palette_payload(payload: &str) -> bool {
        !payload.is_empty() && payload.chars().all(char::is_alphanumeric)
    }

    impl Display for SgrCode<'_> {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset               => write!(f, "{CSI}0{SGR}"),
                SgrCode::ResetForeground     => write!(f, "{CSI}39{SGR}"),
                SgrCode::ResetBackground     => write!(f, "{CSI}49{SGR}"),
                SgrCode::ResetIntensity      => write!(f, "{CSI}22{SGR}"),
                SgrCode::Foreground(payload) => {
                    let mode = if is_palette_payload(payload) { 5 } else { 2 };
                    write!(f, "{CSI}38;{mode};{payload}{SGR}")
                }
                SgrCode::Background(payload) => {
                    let mode = if is_palette_payload(payload) { 5 } else { 2 };
                    write!(f, "{CSI}48;{mode};{payload}{SGR}")
                }
                SgrCode::Style(style)        => write!(f, "{CSI}{style}{SGR}"),
            }
        }
    }
}

/// The neutral resets a [`crate::Dye`] starts from. Each one is replaced by the real
/// code of the attribute it stands for, when that attribute is set.
pub mod placeholders {
    pub const FOREGROUND: &str = "\x1b[39m";
    pub const BACKGROUND: &str = "\x1b[49m";
    pub const STYLE: &str = "\x1b[22m";
    pub const ALL: &str = "\x1b[39m\x1b[49m\x1b[22m";
    pub const RESET: &str = "\x1b[0m";
}
