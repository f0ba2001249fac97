// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The capability set shared by every color type: conversions to the other color
//! models, and manipulations (lighten, darken, saturate, desaturate, tint, shade).
//!
//! Manipulations always return the *same* concrete type as the receiver. They compute in
//! RGB or HSL and then go back through the receiver's own [`TransformColor::from_rgb`] /
//! [`TransformColor::from_hsl`] "virtual constructor". So `lighten` on a [`HslColor`]
//! returns a [`HslColor`] and on a [`HexColor`] returns a [`HexColor`].
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV>
//!
//! [`HexColor`]: crate::HexColor

use crate::{HslColor, RgbColor};

pub trait TransformColor: Sized {
    /// Returns a [`RgbColor`] representation of the `self` color.
    fn to_rgb(&self) -> RgbColor;

    /// Returns a [`HslColor`] representation of the `self` color.
    fn to_hsl(&self) -> HslColor;

    /// Returns the CSS serialization of the `self` color.
    fn to_css(&self) -> String;

    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color. See [`crate::convert_rgb_into_ansi256`] for the quantization rules.
    fn to_ansi_index(&self) -> u8 { self.to_rgb().to_ansi_index() }

    /// Virtual constructor: build a `Self` from a [`RgbColor`].
    fn from_rgb(value: RgbColor) -> Self;

    /// Virtual constructor: build a `Self` from a [`HslColor`].
    fn from_hsl(value: HslColor) -> Self;

    /// Add `amount` to the HSL lightness (clamped to 1), computed in RGB space.
    #[must_use]
    fn lighten(&self, amount: f64) -> Self {
        let rgb = self.to_rgb();
        let (hue, lightness, saturation) = rgb_to_hls(rgb.unit_channels());
        let lightness = clamp(lightness + amount, Some(1.0));
        let (red, green, blue) = hls_to_rgb(hue, lightness, saturation);
        Self::from_rgb(RgbColor::from_unit_channels(red, green, blue).with_alpha(rgb.alpha()))
    }

    #[must_use]
    fn darken(&self, amount: f64) -> Self { self.lighten(-amount) }

    #[must_use]
    fn saturate(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        let saturation = clamp(hsl.saturation() + amount, Some(1.0));
        Self::from_hsl(hsl.with_saturation(saturation))
    }

    #[must_use]
    fn desaturate(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        let saturation = clamp(hsl.saturation() - amount, Some(1.0));
        Self::from_hsl(hsl.with_saturation(saturation))
    }

    /// Mix with white. `0.0` is the original color, `1.0` is pure white.
    #[must_use]
    fn tint(&self, amount: f64) -> Self {
        let rgb = self.to_rgb();
        let amount = clamp(amount, Some(1.0));
        let mix = |channel: u8| {
            let channel = f64::from(channel);
            round_channel(channel + (255.0 - channel) * amount)
        };
        Self::from_rgb(
            RgbColor::new(mix(rgb.red), mix(rgb.green), mix(rgb.blue))
                .with_alpha(rgb.alpha()),
        )
    }

    /// Mix with black. `0.0` is the original color, `1.0` is pure black.
    #[must_use]
    fn shade(&self, amount: f64) -> Self {
        let rgb = self.to_rgb();
        let amount = clamp(amount, Some(1.0));
        let mix = |channel: u8| round_channel(f64::from(channel) * (1.0 - amount));
        Self::from_rgb(
            RgbColor::new(mix(rgb.red), mix(rgb.green), mix(rgb.blue))
                .with_alpha(rgb.alpha()),
        )
    }
}

/// Floor at 0, with an optional ceiling.
#[must_use]
pub fn clamp(value: f64, maximum: Option<f64>) -> f64 {
    let value = value.max(0.0);
    match maximum {
        Some(maximum) => value.min(maximum),
        None => value,
    }
}

/// Round half to even, then saturate into a color channel.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_channel(value: f64) -> u8 { value.round_ties_even().clamp(0.0, 255.0) as u8 }

/// Standard HSL derivation. Takes unit RGB channels, returns `(hue, lightness,
/// saturation)` all in `[0, 1]`.
#[must_use]
pub fn rgb_to_hls((red, green, blue): (f64, f64, f64)) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let sum = max + min;
    let range = max - min;
    let lightness = sum / 2.0;

    if range == 0.0 {
        return (0.0, lightness, 0.0);
    }

    let saturation = if lightness <= 0.5 {
        range / sum
    } else {
        range / (2.0 - sum)
    };

    let red_c = (max - red) / range;
    let green_c = (max - green) / range;
    let blue_c = (max - blue) / range;

    let hue = if red == max {
        blue_c - green_c
    } else if green == max {
        2.0 + red_c - blue_c
    } else {
        4.0 + green_c - red_c
    };

    ((hue / 6.0).rem_euclid(1.0), lightness, saturation)
}

/// Inverse of [`rgb_to_hls`]. Returns unit RGB channels.
#[must_use]
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }

    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - (lightness * saturation)
    };
    let m1 = 2.0 * lightness - m2;

    (
        hue_to_channel(m1, m2, hue + 1.0 / 3.0),
        hue_to_channel(m1, m2, hue),
        hue_to_channel(m1, m2, hue - 1.0 / 3.0),
    )
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 0.5 {
        return m2;
    }
    if hue < 2.0 / 3.0 {
        return m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0;
    }
    m1
}
