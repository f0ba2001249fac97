// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation, plus an alpha channel. This is the
//! canonical interchange form: every other color type converts through it.

use super::{convert::{convert_ansi256_into_rgb, convert_rgb_into_ansi256},
            transform_color::{rgb_to_hls, round_channel}};
use crate::{AnsiValue, ColorIndexRangeError, HslColor, InlineString, TransformColor,
            inline_string};

/// Represents a color in RGB format, with an alpha channel in `[0, 1]`.
///
/// The channels are `u8`, so they are always integers in `[0, 255]`. The alpha is only
/// reachable via [`RgbColor::with_alpha`], which clamps it.
#[derive(Clone, PartialEq, Copy, Debug)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    alpha: f64,
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::new(red, green, blue) }
}

impl From<(u8, u8, u8, f64)> for RgbColor {
    fn from((red, green, blue, alpha): (u8, u8, u8, f64)) -> Self {
        Self::new(red, green, blue).with_alpha(alpha)
    }
}

impl From<AnsiValue> for RgbColor {
    fn from(value: AnsiValue) -> Self { convert_ansi256_into_rgb(value) }
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Returns a copy with the given alpha, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        self
    }

    #[must_use]
    pub fn alpha(&self) -> f64 { self.alpha }

    /// Build from a slice of 3 (`r, g, b`) or 4 (`r, g, b, a * 255`) channel values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColorFormatError::InvalidTupleLength`] for any other length.
    pub fn from_tuple(value: &[u8]) -> Result<Self, crate::ColorFormatError> {
        match *value {
            [red, green, blue] => Ok(Self::new(red, green, blue)),
            [red, green, blue, alpha] => {
                Ok(Self::new(red, green, blue).with_alpha(f64::from(alpha) / 255.0))
            }
            _ => Err(crate::ColorFormatError::InvalidTupleLength { len: value.len() }),
        }
    }

    /// Look up an entry of the xterm 256-color palette.
    #[must_use]
    pub fn from_ansi_index(index: u8) -> Self { convert_ansi256_into_rgb(AnsiValue::new(index)) }

    /// Same as [`RgbColor::from_ansi_index`] but for an index that has not been range
    /// checked yet.
    ///
    /// # Errors
    ///
    /// Returns [`ColorIndexRangeError`] if `index` is not in `0..=255`.
    pub fn try_from_ansi_index(index: i64) -> Result<Self, ColorIndexRangeError> {
        let ansi = AnsiValue::try_from(index)?;
        Ok(Self::from(ansi))
    }

    /// `(r, g, b)` without the alpha channel.
    #[must_use]
    pub fn rgb_tuple(&self) -> (u8, u8, u8) { (self.red, self.green, self.blue) }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when alpha is below 1.
    #[must_use]
    pub fn to_hex(&self) -> InlineString {
        let Self {
            red, green, blue, ..
        } = *self;
        match self.alpha_byte() {
            Some(alpha) => inline_string!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}"),
            None => inline_string!("#{red:02x}{green:02x}{blue:02x}"),
        }
    }

    /// Approximate perceived brightness in `[0, 1]`.
    #[must_use]
    pub fn brightness(&self) -> f64 {
        let (red, green, blue) = self.float_channels();
        (0.299 * red.powi(2) + 0.587 * green.powi(2) + 0.114 * blue.powi(2)).sqrt() / 255.0
    }

    /// Perceived luminance in `[0, 1]`, with a 2.2 gamma.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let (red, green, blue) = self.float_channels();
        (0.2126 * red.powf(2.2) + 0.7152 * green.powf(2.2) + 0.0722 * blue.powf(2.2))
            / 255_f64.powf(2.2)
    }

    /// `round(alpha * 255)` when the alpha is below 1, [None] for opaque colors.
    #[must_use]
    pub fn alpha_byte(&self) -> Option<u8> {
        (self.alpha < 1.0).then(|| round_channel(self.alpha * 255.0))
    }

    pub(crate) fn unit_channels(&self) -> (f64, f64, f64) {
        let (red, green, blue) = self.float_channels();
        (red / 255.0, green / 255.0, blue / 255.0)
    }

    pub(crate) fn from_unit_channels(red: f64, green: f64, blue: f64) -> Self {
        Self::new(
            round_channel(red * 255.0),
            round_channel(green * 255.0),
            round_channel(blue * 255.0),
        )
    }

    fn float_channels(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red),
            f64::from(self.green),
            f64::from(self.blue),
        )
    }
}

impl TransformColor for RgbColor {
    fn to_rgb(&self) -> RgbColor { *self }

    fn to_hsl(&self) -> HslColor {
        let (hue, lightness, saturation) = rgb_to_hls(self.unit_channels());
        HslColor::new(hue * 360.0, saturation, lightness).with_alpha(self.alpha)
    }

    fn to_css(&self) -> String {
        let Self {
            red,
            green,
            blue,
            alpha,
        } = *self;
        if alpha < 1.0 {
            format!("rgba({red}, {green}, {blue}, {alpha})")
        } else {
            format!("rgb({red}, {green}, {blue})")
        }
    }

    fn to_ansi_index(&self) -> u8 { convert_rgb_into_ansi256(*self).index }

    fn from_rgb(value: RgbColor) -> Self { value }

    fn from_hsl(value: HslColor) -> Self { value.to_rgb() }
}
