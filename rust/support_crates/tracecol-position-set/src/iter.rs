use std::{iter::Peekable, ops::Range};

/// An iterator over the positions present in a `PositionSet`, in ascending order.
#[derive(Clone)]
pub struct PositionsIter<'a> {
    words: std::slice::Iter<'a, u64>,
    current_word: u64,
    next_word_index: u32,
    base_index: u32,
    span: u32,
}

impl<'a> PositionsIter<'a> {
    pub(crate) fn new(words: &'a [u64], span: u32) -> PositionsIter<'a> {
        PositionsIter {
            words: words.iter(),
            current_word: 0,
            next_word_index: 0,
            base_index: 0,
            span,
        }
    }
}

impl Iterator for PositionsIter<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        loop {
            if self.current_word != 0 {
                let index = self.base_index + self.current_word.trailing_zeros();
                if index >= self.span {
                    return None;
                }
                // Clear the lowest set bit
                self.current_word &= self.current_word - 1;
                return Some(index);
            }

            let &word = self.words.next()?;
            self.current_word = word;
            self.base_index = self.next_word_index * 64;
            self.next_word_index += 1;
        }
    }
}

/// An iterator over maximal runs of present positions, as half-open ranges.
#[derive(Clone)]
pub struct RangesIter<'a> {
    positions: Peekable<PositionsIter<'a>>,
}

impl<'a> RangesIter<'a> {
    pub(crate) fn new(positions: PositionsIter<'a>) -> RangesIter<'a> {
        RangesIter {
            positions: positions.peekable(),
        }
    }
}

impl Iterator for RangesIter<'_> {
    type Item = Range<u32>;

    fn next(&mut self) -> Option<Range<u32>> {
        let start = self.positions.next()?;
        let mut end = start + 1;
        while self.positions.next_if_eq(&end).is_some() {
            end += 1;
        }
        Some(start..end)
    }
}
