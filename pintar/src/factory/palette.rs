// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A table of the 256-color palette, each index shown as a background swatch and as a
//! foreground sample.
//!
//! More info: <https://www.ditig.com/256-colors-cheat-sheet>

use std::fmt::Write as _;

use crate::{SgrCode, inline_string};

pub const PALETTE_COLUMNS: usize = 10;
/// Enough rows to fit all 256 indices in [`PALETTE_COLUMNS`] columns.
pub const PALETTE_ROWS: usize = 256_usize.div_ceil(PALETTE_COLUMNS);

/// Indices run down the columns: row `r`, column `c` is `r + c * PALETTE_ROWS`. The last
/// column is short.
#[must_use]
pub fn palette_table() -> String {
    let mut acc = String::new();
    for row in 0..PALETTE_ROWS {
        for column in 0..PALETTE_COLUMNS {
            let index = row + column * PALETTE_ROWS;
            if index > usize::from(u8::MAX) {
                continue;
            }
            let payload = inline_string!("{index}");
            _ = write!(
                acc,
                "{index:>3}-{} Font {} {}Text{}    ",
                SgrCode::Background(&payload),
                SgrCode::Reset,
                SgrCode::Foreground(&payload),
                SgrCode::Reset,
            );
        }
        acc.push('\n');
    }
    acc
}

pub fn print_palette() {
    print!("{}", palette_table());
}
