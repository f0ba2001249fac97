// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a hex color type, and a parser that parses a hex color string
//! into it. The hex color string can be in any of the following formats: `#RGB`,
//! `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, eg: `#FF0000` for red. Digits are case insensitive.

use std::{fmt::{Display, Formatter},
          hash::{Hash, Hasher},
          str::FromStr};

use crate::{ColorFormatError, HslColor, InlineString, RgbColor, TransformColor,
            inline_string};

/// A color written as a hex string. The spelling is kept (normalized to uppercase) and
/// the parsed channels are cached next to it.
///
/// Two values with different spellings but identical channels are equal, eg: `#F00`
/// and `#ff0000`. Alpha is compared with a `0.001` tolerance.
#[derive(Clone, Debug)]
pub struct HexColor {
    value: InlineString,
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

const ALPHA_TOLERANCE: f64 = 0.001;

mod hex_color_impl {
    use super::*;

    impl HexColor {
        /// # Errors
        ///
        /// Returns a [`ColorFormatError`] if the marker is missing, a digit is not
        /// hexadecimal, or the number of digits is not one of 3, 4, 6 or 8.
        pub fn try_new(input: &str) -> Result<Self, ColorFormatError> {
            let Ok((remainder, digits)) = parser::parse_hex_marker_and_digits(input)
            else {
                return Err(ColorFormatError::MissingHexMarker {
                    input: input.into(),
                });
            };

            if !remainder.is_empty() {
                return Err(ColorFormatError::InvalidHexDigits {
                    input: input.into(),
                });
            }

            if !matches!(digits.len(), 3 | 4 | 6 | 8) {
                return Err(ColorFormatError::InvalidHexLength {
                    input: input.into(),
                    digit_count: digits.len(),
                });
            }

            let Ok((_, channels)) = parser::parse_channels(digits) else {
                return Err(ColorFormatError::InvalidHexDigits {
                    input: input.into(),
                });
            };

            let (red, green, blue, alpha) = match *channels.as_slice() {
                [red, green, blue] => (red, green, blue, 1.0),
                [red, green, blue, alpha] => (red, green, blue, f64::from(alpha) / 255.0),
                _ => {
                    return Err(ColorFormatError::InvalidHexLength {
                        input: input.into(),
                        digit_count: digits.len(),
                    });
                }
            };

            let mut value = InlineString::from("#");
            value.push_str(&digits.to_ascii_uppercase());

            Ok(Self {
                value,
                red,
                green,
                blue,
                alpha,
            })
        }

        /// Build from a slice of 3 or 4 channel values, see [`RgbColor::from_tuple`].
        ///
        /// # Errors
        ///
        /// Returns [`ColorFormatError::InvalidTupleLength`] for any other length.
        pub fn from_tuple(value: &[u8]) -> Result<Self, ColorFormatError> {
            Ok(Self::from_rgb(RgbColor::from_tuple(value)?))
        }

        /// The normalized (uppercase) spelling.
        #[must_use]
        pub fn value(&self) -> &str { self.value.as_str() }

        #[must_use]
        pub fn red(&self) -> u8 { self.red }

        #[must_use]
        pub fn green(&self) -> u8 { self.green }

        #[must_use]
        pub fn blue(&self) -> u8 { self.blue }

        #[must_use]
        pub fn alpha(&self) -> f64 { self.alpha }

        /// Same as [`HexColor::value`], as an owned string.
        #[must_use]
        pub fn to_hex(&self) -> InlineString { self.value.clone() }

        /// `#RGB` (or `#RGBA`) when every channel (and the alpha byte, if any) is a
        /// multiple of 17, otherwise the long form.
        #[must_use]
        pub fn to_short_hex(&self) -> InlineString {
            let Self {
                red, green, blue, ..
            } = *self;
            let short = |it: u8| it / 17;
            let fits = |it: u8| it % 17 == 0;

            match self.to_rgb().alpha_byte() {
                Some(alpha) if fits(red) && fits(green) && fits(blue) && fits(alpha) => {
                    inline_string!(
                        "#{:X}{:X}{:X}{:X}",
                        short(red),
                        short(green),
                        short(blue),
                        short(alpha)
                    )
                }
                None if fits(red) && fits(green) && fits(blue) => {
                    inline_string!("#{:X}{:X}{:X}", short(red), short(green), short(blue))
                }
                _ => self.to_long_hex(),
            }
        }

        /// Always `#RRGGBB`, or `#RRGGBBAA` when alpha is below 1.
        #[must_use]
        pub fn to_long_hex(&self) -> InlineString { long_hex(&self.to_rgb()) }
    }

    fn long_hex(rgb: &RgbColor) -> InlineString {
        let (red, green, blue) = rgb.rgb_tuple();
        match rgb.alpha_byte() {
            Some(alpha) => inline_string!("#{red:02X}{green:02X}{blue:02X}{alpha:02X}"),
            None => inline_string!("#{red:02X}{green:02X}{blue:02X}"),
        }
    }

    impl TransformColor for HexColor {
        fn to_rgb(&self) -> RgbColor {
            RgbColor::new(self.red, self.green, self.blue).with_alpha(self.alpha)
        }

        fn to_hsl(&self) -> HslColor { self.to_rgb().to_hsl() }

        /// The lowercase spelling.
        fn to_css(&self) -> String { self.value.to_ascii_lowercase() }

        /// 6 digits when opaque, 8 otherwise. The alpha is quantized to a byte.
        fn from_rgb(value: RgbColor) -> Self {
            let alpha = value
                .alpha_byte()
                .map_or(1.0, |byte| f64::from(byte) / 255.0);
            Self {
                value: long_hex(&value),
                red: value.red,
                green: value.green,
                blue: value.blue,
                alpha,
            }
        }

        fn from_hsl(value: HslColor) -> Self { Self::from_rgb(value.to_rgb()) }
    }

    impl PartialEq for HexColor {
        fn eq(&self, other: &Self) -> bool {
            self.red == other.red
                && self.green == other.green
                && self.blue == other.blue
                && (self.alpha - other.alpha).abs() < ALPHA_TOLERANCE
        }
    }

    /// Alpha is always `byte / 255`, so distinct alphas are further apart than the
    /// tolerance and equality stays transitive.
    impl Eq for HexColor {}

    impl Hash for HexColor {
        #[allow(clippy::cast_possible_truncation)]
        fn hash<H: Hasher>(&self, state: &mut H) {
            (self.red, self.green, self.blue).hash(state);
            ((self.alpha * 1000.0).round() as i64).hash(state);
        }
    }

    impl Display for HexColor {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.value.to_ascii_lowercase())
        }
    }

    impl FromStr for HexColor {
        type Err = ColorFormatError;

        fn from_str(input: &str) -> Result<Self, Self::Err> { Self::try_new(input) }
    }

    impl TryFrom<&str> for HexColor {
        type Error = ColorFormatError;

        fn try_from(input: &str) -> Result<Self, Self::Error> { Self::try_new(input) }
    }

    impl From<HexColor> for RgbColor {
        fn from(value: HexColor) -> Self { value.to_rgb() }
    }
}

/// nom parsers used by [`HexColor::try_new`].
mod parser {
    use nom::{IResult,
              bytes::complete::{tag, take_while, take_while_m_n},
              combinator::{all_consuming, map_res},
              multi::many_m_n,
              sequence::preceded};

    use crate::InlineVec;

    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// The `#` marker followed by as many hex digits as there are. The remainder is
    /// non empty if a non hex character shows up.
    pub fn parse_hex_marker_and_digits(input: &str) -> IResult<&str, &str> {
        preceded(tag("#"), take_while(match_is_hex_digit))(input)
    }

    /// Two digits, eg: `FF` is 255.
    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), |it| {
            u8::from_str_radix(it, 16)
        })(input)
    }

    /// One digit, doubled, eg: `F` is `FF` is 255.
    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it| {
            u8::from_str_radix(it, 16).map(|nibble| nibble * 17)
        })(input)
    }

    /// 3 or 4 channels, short form for 3 / 4 digits, long form for 6 / 8 digits.
    pub fn parse_channels(digits: &str) -> IResult<&str, InlineVec<u8>> {
        let (remainder, channels) = if digits.len() <= 4 {
            all_consuming(many_m_n(3, 4, parse_hex_nibble))(digits)?
        } else {
            all_consuming(many_m_n(3, 4, parse_hex_seg))(digits)?
        };
        Ok((remainder, channels.into_iter().collect()))
    }
}
