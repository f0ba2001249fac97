// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! Each index (0-255) maps to a specific color in the palette. Keeping a color in this
//! form (instead of eagerly widening it to RGB) means it lowers to the `38;5;N` /
//! `48;5;N` escape form when painted.

use super::convert::{convert_ansi256_into_rgb, convert_rgb_into_ansi256};
use crate::{ColorIndexRangeError, HslColor, RgbColor, TransformColor};

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl TryFrom<i64> for AnsiValue {
    type Error = ColorIndexRangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self::new)
            .map_err(|_| ColorIndexRangeError { index: value })
    }
}

impl TryFrom<i32> for AnsiValue {
    type Error = ColorIndexRangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> { Self::try_from(i64::from(value)) }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// Check if this is one of the 16 named colors (indices 0-15).
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }
}

impl TransformColor for AnsiValue {
    fn to_rgb(&self) -> RgbColor { convert_ansi256_into_rgb(*self) }

    fn to_hsl(&self) -> HslColor { self.to_rgb().to_hsl() }

    fn to_css(&self) -> String { self.to_rgb().to_css() }

    fn to_ansi_index(&self) -> u8 { self.index }

    /// Snaps to the palette, any alpha is dropped.
    fn from_rgb(value: RgbColor) -> Self { convert_rgb_into_ansi256(value) }

    fn from_hsl(value: HslColor) -> Self { Self::from_rgb(value.to_rgb()) }
}
