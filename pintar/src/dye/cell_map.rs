// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Classify every code point of a rendered string as part of an escape sequence, or as a
//! visible cell with a dense logical index. This is what lets a [`crate::Dye`] be
//! measured, iterated and sliced by what is actually printed, while keeping every escape
//! sequence intact.
//!
//! ```text
//! rendered:  ␛[0m␛[38;5;1m␛[49m␛[22m h  i ␛[0m␛[39m␛[49m␛[22m
//! kind:      EEEE EEEEEEEE EEEEE EEEEE 0  1 EEEE EEEEE EEEEE EEEEE
//! ```

use std::{num::NonZeroIsize,
          ops::{Range, RangeFrom, RangeFull, RangeTo}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Part of an escape sequence, from `ESC [` up to and including the next `m` (or to
    /// the end of the string when there is no `m`).
    Escape,
    /// A printed character, and its logical index among the printed characters.
    Visible(usize),
}

/// One [`CellKind`] per code point of the classified string, plus the clean (escape
/// free) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMap {
    kinds: Vec<CellKind>,
    clean: String,
    visible_len: usize,
}

const ESC: char = '\x1b';
const CSI_SECOND: char = '[';
const SGR_FINAL: char = 'm';

impl CellMap {
    #[must_use]
    pub fn classify(rendered: &str) -> Self {
        let chars: Vec<char> = rendered.chars().collect();
        let mut kinds = Vec::with_capacity(chars.len());
        let mut clean = String::with_capacity(rendered.len());
        let mut visible_len = 0;

        let mut index = 0;
        while index < chars.len() {
            if chars[index] == ESC && chars.get(index + 1) == Some(&CSI_SECOND) {
                let end = chars[index..]
                    .iter()
                    .position(|&it| it == SGR_FINAL)
                    .map_or(chars.len(), |offset| index + offset + 1);
                kinds.resize(kinds.len() + (end - index), CellKind::Escape);
                index = end;
            } else {
                kinds.push(CellKind::Visible(visible_len));
                clean.push(chars[index]);
                visible_len += 1;
                index += 1;
            }
        }

        tracing::trace!(
            message = "classify rendered string",
            cells = kinds.len(),
            visible = visible_len
        );

        Self {
            kinds,
            clean,
            visible_len,
        }
    }

    #[must_use]
    pub fn kinds(&self) -> &[CellKind] { &self.kinds }

    #[must_use]
    pub fn clean(&self) -> &str { &self.clean }

    /// Number of visible cells.
    #[must_use]
    pub fn len(&self) -> usize { self.visible_len }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.visible_len == 0 }

    /// Rebuild `rendered` (the string this map was made from) keeping every escape cell
    /// and only the visible cells that `slice` selects, in their original order.
    #[must_use]
    pub fn extract(&self, rendered: &str, slice: DyeSlice) -> String {
        let mut selected = vec![false; self.visible_len];
        for logical_index in slice.indices(self.visible_len) {
            selected[logical_index] = true;
        }

        let acc: String = rendered
            .chars()
            .zip(&self.kinds)
            .filter(|(_, kind)| match kind {
                CellKind::Escape => true,
                CellKind::Visible(logical_index) => selected[*logical_index],
            })
            .map(|(it, _)| it)
            .collect();

        tracing::trace!(message = "extract slice", slice = ?slice, result = ?acc);
        acc
    }
}

/// A `[start:stop:step]` slice over the visible cells. Negative bounds count from the
/// end, out of range bounds are clamped, and [None] means "from the beginning" or "to
/// the end" (which end depends on the sign of `step`). When extracting, a negative step
/// only chooses which cells are kept, not their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DyeSlice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: NonZeroIsize,
}

const STEP_ONE: NonZeroIsize = match NonZeroIsize::new(1) {
    Some(it) => it,
    None => unreachable!(),
};

impl Default for DyeSlice {
    fn default() -> Self {
        Self {
            start: None,
            stop: None,
            step: STEP_ONE,
        }
    }
}

impl DyeSlice {
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self {
            start,
            stop,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn stepped(mut self, step: NonZeroIsize) -> Self {
        self.step = step;
        self
    }

    /// A single logical index, as `[index:index + 1]`. A negative `index` therefore
    /// only selects something when it is not `-1`.
    #[must_use]
    pub fn at(index: isize) -> Self { Self::new(Some(index), Some(index.saturating_add(1))) }

    /// The logical indices this slice selects from a sequence of `len` items, in
    /// iteration order.
    pub fn indices(&self, len: usize) -> impl Iterator<Item = usize> + use<> {
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let step = self.step.get();
        let forward = step > 0;

        let adjust = |bound: isize| {
            if bound < 0 {
                let it = bound.saturating_add(len);
                if it < 0 { if forward { 0 } else { -1 } } else { it }
            } else if bound >= len {
                if forward { len } else { len - 1 }
            } else {
                bound
            }
        };

        let start = self
            .start
            .map_or(if forward { 0 } else { len - 1 }, adjust);
        let stop = self.stop.map_or(if forward { len } else { -1 }, adjust);

        let mut current = start;
        std::iter::from_fn(move || {
            let in_range = if forward { current < stop } else { current > stop };
            if !in_range {
                return None;
            }
            let it = current;
            current = current.saturating_add(step);
            usize::try_from(it).ok()
        })
    }
}

impl From<Range<isize>> for DyeSlice {
    fn from(value: Range<isize>) -> Self { Self::new(Some(value.start), Some(value.end)) }
}

impl From<RangeFrom<isize>> for DyeSlice {
    fn from(value: RangeFrom<isize>) -> Self { Self::new(Some(value.start), None) }
}

impl From<RangeTo<isize>> for DyeSlice {
    fn from(value: RangeTo<isize>) -> Self { Self::new(None, Some(value.end)) }
}

impl From<RangeFull> for DyeSlice {
    fn from(_: RangeFull) -> Self { Self::default() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn step(value: isize) -> NonZeroIsize { NonZeroIsize::new(value).unwrap() }

    #[test]
    fn test_classify() {
        let it = CellMap::classify("\x1b[1mab\x1b[0mc");
        assert_eq!(it.clean(), "abc");
        assert_eq!(it.len(), 3);
        assert_eq!(&it.kinds()[..4], &[CellKind::Escape; 4]);
        assert_eq!(it.kinds()[4], CellKind::Visible(0));
        assert_eq!(it.kinds()[5], CellKind::Visible(1));
        assert_eq!(it.kinds()[10], CellKind::Visible(2));
    }

    #[test]
    fn test_classify_unterminated_escape_runs_to_end() {
        let it = CellMap::classify("ab\x1b[38;2;1");
        assert_eq!(it.clean(), "ab");
        assert_eq!(it.len(), 2);
        assert_eq!(it.kinds().len(), 10);
        assert!(it.kinds()[2..].iter().all(|kind| *kind == CellKind::Escape));
    }

    #[test]
    fn test_lone_escape_is_visible() {
        let it = CellMap::classify("a\x1bb");
        assert_eq!(it.clean(), "a\x1bb");
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn test_multibyte_chars_are_one_cell_each() {
        let it = CellMap::classify("\x1b[1mñé😀\x1b[0m");
        assert_eq!(it.len(), 3);
        assert_eq!(it.clean(), "ñé😀");
    }

    #[test_case(DyeSlice::from(1..4), vec![1, 2, 3])]
    #[test_case(DyeSlice::from(..), vec![0, 1, 2, 3, 4])]
    #[test_case(DyeSlice::from(-2..), vec![3, 4])]
    #[test_case(DyeSlice::from(..-3), vec![0, 1])]
    #[test_case(DyeSlice::from(3..100), vec![3, 4])]
    #[test_case(DyeSlice::from(-100..2), vec![0, 1])]
    #[test_case(DyeSlice::from(4..1), vec![])]
    #[test_case(DyeSlice::from(..).stepped(step(2)), vec![0, 2, 4])]
    #[test_case(DyeSlice::from(..).stepped(step(-1)), vec![4, 3, 2, 1, 0])]
    #[test_case(DyeSlice::from(3..0).stepped(step(-2)), vec![3, 1])]
    #[test_case(DyeSlice::from(-1..-100).stepped(step(-3)), vec![4, 1])]
    #[test_case(DyeSlice::at(2), vec![2])]
    #[test_case(DyeSlice::at(-2), vec![3])]
    #[test_case(DyeSlice::at(-1), vec![])]
    #[test_case(DyeSlice::at(5), vec![])]
    fn test_indices(slice: DyeSlice, expected: Vec<usize>) {
        assert_eq!(slice.indices(5).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_indices_empty() {
        assert_eq!(DyeSlice::default().indices(0).count(), 0);
        assert_eq!(
            DyeSlice::default().stepped(step(-1)).indices(0).count(),
            0
        );
    }

    #[test]
    fn test_extract_keeps_every_escape() {
        let rendered = "\x1b[1mab\x1b[0mcd";
        let map = CellMap::classify(rendered);
        assert_eq!(map.extract(rendered, DyeSlice::from(1..3)), "\x1b[1mb\x1b[0mc");
        assert_eq!(map.extract(rendered, DyeSlice::from(4..)), "\x1b[1m\x1b[0m");
    }
}
