// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::{AnsiValue, HexColor, HslColor, RgbColor, TransformColor};

/// Any of the color types in this crate. This is what the color spec parser returns, and
/// what [`crate::PaintStyle`] holds for foreground and background.
///
/// Manipulations keep the variant, eg: lightening a [`Color::Hsl`] gives back a
/// [`Color::Hsl`].
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Rgb(RgbColor),
    Hsl(HslColor),
    Hex(HexColor),
    Ansi(AnsiValue),
}

/// Forward a call to the wrapped color, re-wrapping the result in the same variant.
macro_rules! map_variant {
    ($self:expr, $it:ident => $body:expr) => {
        match $self {
            Color::Rgb($it) => Color::Rgb($body),
            Color::Hsl($it) => Color::Hsl($body),
            Color::Hex($it) => Color::Hex($body),
            Color::Ansi($it) => Color::Ansi($body),
        }
    };
}

/// Forward a call to the wrapped color.
macro_rules! with_variant {
    ($self:expr, $it:ident => $body:expr) => {
        match $self {
            Color::Rgb($it) => $body,
            Color::Hsl($it) => $body,
            Color::Hex($it) => $body,
            Color::Ansi($it) => $body,
        }
    };
}

impl TransformColor for Color {
    fn to_rgb(&self) -> RgbColor { with_variant!(self, it => it.to_rgb()) }

    fn to_hsl(&self) -> HslColor { with_variant!(self, it => it.to_hsl()) }

    fn to_css(&self) -> String { with_variant!(self, it => it.to_css()) }

    fn to_ansi_index(&self) -> u8 { with_variant!(self, it => it.to_ansi_index()) }

    fn from_rgb(value: RgbColor) -> Self { Color::Rgb(value) }

    fn from_hsl(value: HslColor) -> Self { Color::Hsl(value) }

    fn lighten(&self, amount: f64) -> Self { map_variant!(self, it => it.lighten(amount)) }

    fn darken(&self, amount: f64) -> Self { map_variant!(self, it => it.darken(amount)) }

    fn saturate(&self, amount: f64) -> Self { map_variant!(self, it => it.saturate(amount)) }

    fn desaturate(&self, amount: f64) -> Self {
        map_variant!(self, it => it.desaturate(amount))
    }

    fn tint(&self, amount: f64) -> Self { map_variant!(self, it => it.tint(amount)) }

    fn shade(&self, amount: f64) -> Self { map_variant!(self, it => it.shade(amount)) }
}

impl Color {
    /// The payload that goes after `38;` / `48;` in an escape sequence: the palette
    /// index for [`Color::Ansi`], `r;g;b` for everything else.
    #[must_use]
    pub fn escape_payload(&self) -> crate::InlineString {
        match self {
            Color::Ansi(ansi) => crate::inline_string!("{}", ansi.index),
            other => {
                let (red, green, blue) = other.to_rgb().rgb_tuple();
                crate::inline_string!("{red};{green};{blue}")
            }
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl From<RgbColor> for Color {
    fn from(value: RgbColor) -> Self { Color::Rgb(value) }
}

impl From<HslColor> for Color {
    fn from(value: HslColor) -> Self { Color::Hsl(value) }
}

impl From<HexColor> for Color {
    fn from(value: HexColor) -> Self { Color::Hex(value) }
}

impl From<AnsiValue> for Color {
    fn from(value: AnsiValue) -> Self { Color::Ansi(value) }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self { Color::Rgb(value.into()) }
}
