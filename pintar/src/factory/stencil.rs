// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Dye, PaintStyle, PintarError, TryIntoColor, TryIntoStyle};

/// Holds a text now, and paints it later (possibly more than once, in different ways).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stencil {
    text: String,
}

impl Stencil {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self { Self { text: text.into() } }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn spray(&self, paint: PaintStyle) -> Dye { Dye::new(self.text.clone(), paint) }

    /// # Errors
    ///
    /// Returns a [`PintarError`] if a color or the style can't be parsed.
    pub fn try_spray(
        &self,
        fore: impl TryIntoColor,
        back: impl TryIntoColor,
        style: impl TryIntoStyle,
    ) -> Result<Dye, PintarError> {
        Dye::try_new(self.text.clone(), fore, back, style)
    }
}
