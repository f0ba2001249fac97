// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod cell_map;
mod dye_impl;
mod dye_style;
mod paint_style;
mod sgr_code;

// Re-export.
pub use cell_map::*;
pub use dye_impl::*;
pub use dye_style::*;
pub use paint_style::*;
pub use sgr_code::*;
