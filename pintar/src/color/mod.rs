// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod ansi_value;
mod any_color;
mod color_spec_parser;
mod convert;
mod hex_color;
mod hsl_color;
mod rgb_color;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use any_color::*;
pub use color_spec_parser::*;
pub use convert::*;
pub use hex_color::*;
pub use hsl_color::*;
pub use rgb_color::*;
pub use transform_color::*;
