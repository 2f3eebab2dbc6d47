//! Ordered set of u32 row positions over a fixed conceptual space.
//!
//! `PositionSet` models a set S ⊆ [0, span) where span is a mandatory upper bound,
//! usually the row count of the column that produced the set. The span is part of
//! the identity of a set: two sets with the same elements but different spans are
//! distinct, and binary operations require equal spans.
//!
//! Representation
//! - A dense bitset of `span.div_ceil(64)` u64 words in LSB order: bit 0 is the LSB
//!   of word 0, bit 64 the LSB of word 1, and so on.
//! - Bits beyond `span` in the final word are always zero.
//!
//! Methods that take a position panic if the position is outside [0, span).

use std::ops::Range;

use crate::iter::{PositionsIter, RangesIter};

/// An ordered set of u32 positions constrained to the domain [0, span).
#[derive(Clone, PartialEq, Eq)]
pub struct PositionSet {
    words: Box<[u64]>,
    span: u32,
}

impl PositionSet {
    /// Create an empty set over [0, span).
    pub fn empty(span: u32) -> PositionSet {
        PositionSet {
            words: vec![0u64; Self::word_count(span)].into_boxed_slice(),
            span,
        }
    }

    /// Create a full set over [0, span).
    pub fn full(span: u32) -> PositionSet {
        let mut words = vec![u64::MAX; Self::word_count(span)].into_boxed_slice();
        Self::mask_tail(&mut words, span);
        PositionSet { words, span }
    }

    /// Build a set from an iterator of positions.
    ///
    /// Positions may come in any order and may repeat.
    ///
    /// Panics: if any position is ≥ span.
    pub fn from_positions(span: u32, positions: impl IntoIterator<Item = u32>) -> PositionSet {
        let mut set = PositionSet::empty(span);
        for pos in positions {
            set.set(pos);
        }
        set
    }

    /// Build a set from an iterator of half-open ranges [start, end).
    ///
    /// Ranges may overlap and come in any order; empty ranges are ignored.
    ///
    /// Panics: if any range end is > span.
    pub fn from_ranges(span: u32, ranges: impl IntoIterator<Item = Range<u32>>) -> PositionSet {
        let mut set = PositionSet::empty(span);
        for range in ranges {
            set.set_range(range);
        }
        set
    }

    /// Return the span that defines the domain [0, span).
    #[inline]
    pub fn span(&self) -> u32 {
        self.span
    }

    /// Test membership of pos in the set.
    ///
    /// Panics: if pos ≥ span.
    #[inline]
    pub fn contains(&self, pos: u32) -> bool {
        self.check_position(pos);
        let (word, bit) = Self::bit_position(pos);
        (self.words[word] & (1u64 << bit)) != 0
    }

    /// Add a single position to the set.
    ///
    /// Panics: if pos ≥ span.
    #[inline]
    pub fn set(&mut self, pos: u32) {
        self.check_position(pos);
        let (word, bit) = Self::bit_position(pos);
        self.words[word] |= 1u64 << bit;
    }

    /// Remove a single position from the set.
    ///
    /// Panics: if pos ≥ span.
    #[inline]
    pub fn reset(&mut self, pos: u32) {
        self.check_position(pos);
        let (word, bit) = Self::bit_position(pos);
        self.words[word] &= !(1u64 << bit);
    }

    /// Add all positions of `range` to the set.
    ///
    /// Panics: if `range.end > span`.
    pub fn set_range(&mut self, range: Range<u32>) {
        self.process_range(range, |word, mask| *word |= mask);
    }

    /// Count the total number of positions present in the set.
    pub fn count_positions(&self) -> u32 {
        self.words.iter().map(|word| word.count_ones()).sum()
    }

    /// Returns `true` if no position is present.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Returns `true` if every position in [0, span) is present.
    pub fn is_full(&self) -> bool {
        self.count_positions() == self.span
    }

    /// Iterate over present positions in ascending order.
    pub fn positions(&self) -> PositionsIter<'_> {
        PositionsIter::new(&self.words, self.span)
    }

    /// Iterate over maximal runs of present positions as half-open ranges,
    /// in ascending order.
    pub fn ranges(&self) -> RangesIter<'_> {
        RangesIter::new(self.positions())
    }

    /// In-place union with `other`.
    ///
    /// Panics: if the spans differ.
    pub fn union_with(&mut self, other: &PositionSet) {
        self.check_same_span(other);
        for (word, &other) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= other;
        }
    }

    /// In-place intersection with `other`.
    ///
    /// Panics: if the spans differ.
    pub fn intersect_with(&mut self, other: &PositionSet) {
        self.check_same_span(other);
        for (word, &other) in self.words.iter_mut().zip(other.words.iter()) {
            *word &= other;
        }
    }

    /// Replace the set with its complement within [0, span).
    pub fn complement(&mut self) {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
        Self::mask_tail(&mut self.words, self.span);
    }

    pub fn union(&self, other: &PositionSet) -> PositionSet {
        let mut res = self.clone();
        res.union_with(other);
        res
    }

    pub fn intersect(&self, other: &PositionSet) -> PositionSet {
        let mut res = self.clone();
        res.intersect_with(other);
        res
    }

    /// Returns the number of heap-allocated bytes used by the set's storage.
    pub fn heap_size_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

impl PositionSet {
    #[inline]
    fn word_count(span: u32) -> usize {
        (span as usize).div_ceil(64)
    }

    #[inline]
    fn bit_position(pos: u32) -> (usize, u32) {
        ((pos / 64) as usize, pos % 64)
    }

    #[inline]
    fn check_position(&self, pos: u32) {
        assert!(
            pos < self.span,
            "position {pos} out of bounds (span: {})",
            self.span
        );
    }

    fn check_same_span(&self, other: &PositionSet) {
        assert_eq!(self.span, other.span, "position set span mismatch");
    }

    /// Applies `mask_fn` to every word intersecting `range`, with a mask holding
    /// the bits of that word which fall within the range.
    fn process_range(&mut self, range: Range<u32>, mask_fn: impl Fn(&mut u64, u64)) {
        if range.start >= range.end {
            return;
        }
        assert!(
            range.end <= self.span,
            "range end {} out of bounds (span: {})",
            range.end,
            self.span
        );

        let (start_word, start_bit) = Self::bit_position(range.start);
        let (end_word, end_bit) = Self::bit_position(range.end);

        if start_word == end_word {
            // end_bit > start_bit here, so the shift is in bounds
            let mask = ((1u64 << end_bit) - 1) & !((1u64 << start_bit) - 1);
            mask_fn(&mut self.words[start_word], mask);
            return;
        }

        mask_fn(&mut self.words[start_word], !((1u64 << start_bit) - 1));
        for word in self.words[start_word + 1..end_word].iter_mut() {
            mask_fn(word, u64::MAX);
        }
        if end_bit > 0 {
            mask_fn(&mut self.words[end_word], (1u64 << end_bit) - 1);
        }
    }

    /// Zeroes the bits beyond `span` in the final word.
    #[inline]
    fn mask_tail(words: &mut [u64], span: u32) {
        let partial = span % 64;
        if partial == 0 {
            return;
        }
        if let Some(last) = words.last_mut() {
            *last &= (1u64 << partial) - 1;
        }
    }
}

impl std::fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionSet")
            .field("span", &self.span)
            .field("ranges", &self.ranges().collect::<Vec<_>>())
            .finish()
    }
}
