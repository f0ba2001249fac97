// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod errors;
mod stack_alloc_types;

// Re-export.
pub use errors::*;
pub use stack_alloc_types::*;
