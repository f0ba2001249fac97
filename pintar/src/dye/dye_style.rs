// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text style attributes (bold, italic, underline, strikethrough), and the conversions
//! that turn the accepted style spec forms into a [`DyeStyle`]:
//!
//! - a name, or `+` joined names: `"bold"`, `"bold+italic"`.
//! - a number, or a numeric string: `1`, `"3"`.
//! - a list of numbers: `[1, 4]`, `vec![1, 9]`.

use std::fmt::{Display, Formatter};

use strum_macros::{AsRefStr, EnumIter, EnumString, FromRepr};

use crate::{InlineVec, StyleFormatError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter, FromRepr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum StyleAttrib {
    Bold = 1,
    Italic = 3,
    Underline = 4,
    Strikethrough = 9,
}

impl StyleAttrib {
    /// The SGR code.
    #[must_use]
    pub fn code(self) -> u8 { self as u8 }

    /// # Errors
    ///
    /// Returns [`StyleFormatError::UnknownCode`] if `code` is not one of 1, 3, 4, 9.
    pub fn try_from_code(code: i64) -> Result<Self, StyleFormatError> {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_repr)
            .ok_or(StyleFormatError::UnknownCode { code })
    }
}

/// One or more [`StyleAttrib`], kept in the order they were given. Displays as the SGR
/// parameter list, eg: `1;3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DyeStyle {
    attribs: InlineVec<StyleAttrib>,
}

impl DyeStyle {
    /// # Errors
    ///
    /// Returns [`StyleFormatError::Empty`] if `attribs` is empty.
    pub fn try_new(
        attribs: impl IntoIterator<Item = StyleAttrib>,
    ) -> Result<Self, StyleFormatError> {
        let attribs: InlineVec<StyleAttrib> = attribs.into_iter().collect();
        if attribs.is_empty() {
            return Err(StyleFormatError::Empty);
        }
        Ok(Self { attribs })
    }

    #[must_use]
    pub fn attribs(&self) -> &[StyleAttrib] { &self.attribs }

    #[must_use]
    pub fn contains(&self, attrib: StyleAttrib) -> bool { self.attribs.contains(&attrib) }

    /// # Errors
    ///
    /// Returns a [`StyleFormatError`] if any code is unsupported or there are none.
    pub fn try_from_codes(
        codes: impl IntoIterator<Item = i64>,
    ) -> Result<Self, StyleFormatError> {
        let attribs = codes
            .into_iter()
            .map(StyleAttrib::try_from_code)
            .collect::<Result<InlineVec<_>, _>>()?;
        Self::try_new(attribs)
    }

    /// Parse `"bold+italic"`, `"underline"` or `"4"`. Every `+` separated token is either
    /// a style name or a numeric code.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleFormatError`] for an empty spec or an unknown token.
    pub fn parse(input: &str) -> Result<Self, StyleFormatError> {
        if input.trim().is_empty() {
            return Err(StyleFormatError::Empty);
        }

        let attribs = input
            .split('+')
            .map(str::trim)
            .map(|token| match token.parse::<i64>() {
                Ok(code) => StyleAttrib::try_from_code(code),
                Err(_) => token
                    .parse::<StyleAttrib>()
                    .map_err(|_| StyleFormatError::UnknownName {
                        token: token.into(),
                    }),
            })
            .collect::<Result<InlineVec<_>, _>>()?;

        let it = Self::try_new(attribs);
        tracing::debug!(message = "parse style spec", spec = %input, result = ?it);
        it
    }
}

impl From<StyleAttrib> for DyeStyle {
    fn from(value: StyleAttrib) -> Self {
        Self {
            attribs: InlineVec::from_slice(&[value]),
        }
    }
}

/// The array must not be empty.
impl<const N: usize> From<[StyleAttrib; N]> for DyeStyle {
    fn from(value: [StyleAttrib; N]) -> Self {
        const { assert!(N > 0) };
        Self {
            attribs: InlineVec::from_slice(&value),
        }
    }
}

impl Display for DyeStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, attrib) in self.attribs.iter().enumerate() {
            if index > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", attrib.code())?;
        }
        Ok(())
    }
}

/// Anything that can be passed as the style of a [`crate::Dye`]. Unlike colors, a
/// style that can't be parsed is always an error.
pub trait TryIntoStyle {
    /// # Errors
    ///
    /// Returns a [`StyleFormatError`] if the style spec is malformed.
    fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError>;
}

mod try_into_style_impl {
    use super::*;

    impl TryIntoStyle for DyeStyle {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            Ok(Some(self))
        }
    }

    impl TryIntoStyle for StyleAttrib {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            Ok(Some(self.into()))
        }
    }

    impl TryIntoStyle for &str {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            DyeStyle::parse(self).map(Some)
        }
    }

    impl TryIntoStyle for String {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            self.as_str().try_into_style()
        }
    }

    impl TryIntoStyle for &String {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            self.as_str().try_into_style()
        }
    }

    impl TryIntoStyle for i64 {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            StyleAttrib::try_from_code(self).map(|it| Some(it.into()))
        }
    }

    impl TryIntoStyle for i32 {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            i64::from(self).try_into_style()
        }
    }

    impl TryIntoStyle for u8 {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            i64::from(self).try_into_style()
        }
    }

    impl TryIntoStyle for &[i64] {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            DyeStyle::try_from_codes(self.iter().copied()).map(Some)
        }
    }

    impl TryIntoStyle for &[i32] {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            DyeStyle::try_from_codes(self.iter().copied().map(i64::from)).map(Some)
        }
    }

    impl<const N: usize> TryIntoStyle for [i32; N] {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            self.as_slice().try_into_style()
        }
    }

    impl TryIntoStyle for Vec<i32> {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            self.as_slice().try_into_style()
        }
    }

    impl TryIntoStyle for Vec<i64> {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            self.as_slice().try_into_style()
        }
    }

    /// [None] means "no style", and is never an error.
    impl<T: TryIntoStyle> TryIntoStyle for Option<T> {
        fn try_into_style(self) -> Result<Option<DyeStyle>, StyleFormatError> {
            match self {
                Some(it) => it.try_into_style(),
                None => Ok(None),
            }
        }
    }
}
