// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these sizes. Smaller static allocation sizes are better
//! than larger ones: anything that doesn't fit spills to the heap, and huge stack
//! allocations can overflow the stack.

use smallstr::SmallString;
use smallvec::SmallVec;

// PERF: An escape sequence like `\x1b[38;2;255;255;255m` is 19 bytes.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 24;

/// Style attributes are: bold, italic, underline, strikethrough.
pub const INLINE_VEC_SIZE: usize = 4;

/// Stack allocated string storage for small strings (escape sequences, CSS
/// serializations, hex spellings). When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list. When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;

/// Just like [`format!`] but returns an [`InlineString`] instead of a [`String`].
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        _ = write!(&mut acc, $($format)*);
        acc
    }};
}
