// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod brush;
mod palette;
mod stencil;

// Re-export.
pub use brush::*;
pub use palette::*;
pub use stencil::*;
