// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between RGB and the xterm 256-color palette.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use crate::{AnsiValue, RgbColor};

pub mod ansi_constants {
    /// The 16 named colors (indices 0-15).
    pub const ANSI_BASE_COLORS: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (128, 0, 0),
        (0, 128, 0),
        (128, 128, 0),
        (0, 0, 128),
        (128, 0, 128),
        (0, 128, 128),
        (192, 192, 192),
        (128, 128, 128),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (0, 0, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];

    /// First index of the 6x6x6 color cube.
    pub const CUBE_START: u8 = 16;
    /// First index of the 24 step grayscale ramp.
    pub const GRAYSCALE_START: u8 = 232;
    /// Channel values below this quantize to cube level 0.
    pub const CUBE_LEVEL_1_THRESHOLD: u8 = 75;
}

use ansi_constants::{ANSI_BASE_COLORS, CUBE_LEVEL_1_THRESHOLD, CUBE_START,
                     GRAYSCALE_START};

/// Maps a color to a palette index. This is an independent, per channel nearest
/// neighbor approximation, and *not* a Euclidean nearest search over all 256 entries.
/// It is the defined behavior:
///
/// 1. Achromatic (`r == g == b`): below 8 maps to 16 (black), above 248 maps to 231
///    (white), anything else maps onto the grayscale ramp via
///    `round(((v - 8) / 247) * 24) + 232`.
/// 2. Otherwise each channel is quantized into 6 levels (`v < 75` is level 0, else
///    `(v - 35) / 40`), and combined as `16 + 36 * r + 6 * g + b`.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbColor) -> AnsiValue {
    let RgbColor {
        red, green, blue, ..
    } = rgb;

    if red == green && green == blue {
        return AnsiValue::new(match red {
            0..8 => CUBE_START,
            249..=255 => 231,
            _ => {
                let step = ((f64::from(red) - 8.0) / 247.0 * 24.0).round_ties_even();
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let step = step as u8;
                GRAYSCALE_START + step
            }
        });
    }

    let red_level = quantize_cube_channel(red);
    let green_level = quantize_cube_channel(green);
    let blue_level = quantize_cube_channel(blue);
    AnsiValue::new(CUBE_START + 36 * red_level + 6 * green_level + blue_level)
}

fn quantize_cube_channel(value: u8) -> u8 {
    if value < CUBE_LEVEL_1_THRESHOLD {
        0
    } else {
        (value - 35) / 40
    }
}

/// Inverse of [`convert_rgb_into_ansi256`], reproducing the canonical xterm palette:
/// the fixed table for 0-15, `55 + 40 * k` for the cube levels, and `8 + 10 * k` for
/// the grayscale ramp.
#[must_use]
pub fn convert_ansi256_into_rgb(ansi: AnsiValue) -> RgbColor {
    let index = ansi.index;

    if index < CUBE_START {
        return ANSI_BASE_COLORS[usize::from(index)].into();
    }

    if index < GRAYSCALE_START {
        let offset = index - CUBE_START;
        let level = |it: u8| if it == 0 { 0 } else { 55 + it * 40 };
        return RgbColor::new(
            level(offset / 36 % 6),
            level(offset / 6 % 6),
            level(offset % 6),
        );
    }

    let gray = 8 + (index - GRAYSCALE_START) * 10;
    RgbColor::new(gray, gray, gray)
}
