// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSL (hue, saturation, lightness) color representation, plus an alpha channel.

use super::transform_color::{clamp, hls_to_rgb};
use crate::{InlineString, RgbColor, TransformColor};

/// The hue is in degrees and always normalized into `[0, 360)`. Saturation, lightness
/// and alpha are always clamped into `[0, 1]`.
#[derive(Clone, PartialEq, Copy, Debug)]
pub struct HslColor {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

impl HslColor {
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: unit(saturation),
            lightness: unit(lightness),
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = unit(alpha);
        self
    }

    #[must_use]
    pub fn hue(&self) -> f64 { self.hue }

    #[must_use]
    pub fn saturation(&self) -> f64 { self.saturation }

    #[must_use]
    pub fn lightness(&self) -> f64 { self.lightness }

    #[must_use]
    pub fn alpha(&self) -> f64 { self.alpha }

    #[must_use]
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = unit(saturation);
        self
    }

    #[must_use]
    pub fn with_lightness(mut self, lightness: f64) -> Self {
        self.lightness = unit(lightness);
        self
    }

    #[must_use]
    pub fn to_hex(&self) -> InlineString { self.to_rgb().to_hex() }
}

fn normalize_hue(hue: f64) -> f64 {
    let it = hue.rem_euclid(360.0);
    // `rem_euclid` can round up to the modulus for tiny negative inputs.
    if it >= 360.0 || it.is_nan() { 0.0 } else { it }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl TransformColor for HslColor {
    fn to_rgb(&self) -> RgbColor {
        let (red, green, blue) = hls_to_rgb(self.hue / 360.0, self.lightness, self.saturation);
        RgbColor::from_unit_channels(red, green, blue).with_alpha(self.alpha)
    }

    fn to_hsl(&self) -> HslColor { *self }

    /// Hue as integer degrees, saturation and lightness as percentages with one decimal.
    fn to_css(&self) -> String {
        let hue = self.hue;
        let saturation = self.saturation * 100.0;
        let lightness = self.lightness * 100.0;
        if self.alpha < 1.0 {
            format!(
                "hsla({hue:.0}, {saturation:.1}%, {lightness:.1}%, {})",
                self.alpha
            )
        } else {
            format!("hsl({hue:.0}, {saturation:.1}%, {lightness:.1}%)")
        }
    }

    fn from_rgb(value: RgbColor) -> Self { value.to_hsl() }

    fn from_hsl(value: HslColor) -> Self { value }

    /// Works directly on the lightness channel, no RGB round trip.
    fn lighten(&self, amount: f64) -> Self {
        Self::from_hsl(self.with_lightness(clamp(self.lightness + amount, Some(1.0))))
    }

    fn saturate(&self, amount: f64) -> Self {
        Self::from_hsl(self.with_saturation(clamp(self.saturation + amount, Some(1.0))))
    }

    fn desaturate(&self, amount: f64) -> Self { self.saturate(-amount) }
}
