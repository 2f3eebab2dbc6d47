//! Result of a predicate search over a column.

use std::ops::Range;

use tracecol_position_set::PositionSet;

/// Matching row positions, either as one contiguous range or as an explicit set.
///
/// Predicates whose matches are known to form a single block (comparisons over a
/// sorted column) are answered with [`RangeOrPositions::Range`] and never enumerate
/// their members. Everything else materializes a [`PositionSet`] spanning the
/// column's row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeOrPositions {
    /// Half-open span `[start, end)` of matching rows.
    Range(Range<u32>),
    /// Explicit ascending set of matching rows.
    Positions(PositionSet),
}

impl RangeOrPositions {
    /// An empty result anchored at `pos`.
    pub fn empty_at(pos: u32) -> RangeOrPositions {
        RangeOrPositions::Range(pos..pos)
    }

    pub fn is_range(&self) -> bool {
        matches!(self, RangeOrPositions::Range(_))
    }

    pub fn as_range(&self) -> Option<&Range<u32>> {
        match self {
            RangeOrPositions::Range(range) => Some(range),
            RangeOrPositions::Positions(_) => None,
        }
    }

    pub fn as_positions(&self) -> Option<&PositionSet> {
        match self {
            RangeOrPositions::Range(_) => None,
            RangeOrPositions::Positions(set) => Some(set),
        }
    }

    /// Number of matching rows.
    pub fn count(&self) -> u32 {
        match self {
            RangeOrPositions::Range(range) => range.end.saturating_sub(range.start),
            RangeOrPositions::Positions(set) => set.count_positions(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if `pos` is one of the matching rows.
    ///
    /// Panics: for a `Positions` result, if `pos` is outside the set's span.
    pub fn contains(&self, pos: u32) -> bool {
        match self {
            RangeOrPositions::Range(range) => range.contains(&pos),
            RangeOrPositions::Positions(set) => set.contains(pos),
        }
    }

    /// Matching rows in ascending order.
    pub fn positions(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            RangeOrPositions::Range(range) => Box::new(range.clone()),
            RangeOrPositions::Positions(set) => Box::new(set.positions()),
        }
    }

    /// Maximal runs of matching rows in ascending order.
    pub fn ranges(&self) -> Box<dyn Iterator<Item = Range<u32>> + '_> {
        match self {
            RangeOrPositions::Range(range) if range.is_empty() => Box::new(std::iter::empty()),
            RangeOrPositions::Range(range) => Box::new(std::iter::once(range.clone())),
            RangeOrPositions::Positions(set) => Box::new(set.ranges()),
        }
    }

    /// Materializes the result as a set over `[0, span)`.
    ///
    /// Panics: if a matching row is ≥ `span`.
    pub fn into_position_set(self, span: u32) -> PositionSet {
        match self {
            RangeOrPositions::Range(range) => PositionSet::from_ranges(span, [range]),
            RangeOrPositions::Positions(set) if set.span() == span => set,
            RangeOrPositions::Positions(set) => PositionSet::from_positions(span, set.positions()),
        }
    }
}

impl From<Range<u32>> for RangeOrPositions {
    fn from(range: Range<u32>) -> Self {
        RangeOrPositions::Range(range)
    }
}

impl From<PositionSet> for RangeOrPositions {
    fn from(set: PositionSet) -> Self {
        RangeOrPositions::Positions(set)
    }
}

#[cfg(test)]
mod tests {
    use tracecol_position_set::PositionSet;

    use super::RangeOrPositions;

    #[test]
    fn test_range_result() {
        let res = RangeOrPositions::from(2u32..5);
        assert!(res.is_range());
        assert_eq!(res.count(), 3);
        assert!(res.contains(2));
        assert!(!res.contains(5));
        assert_eq!(res.positions().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(res.ranges().collect::<Vec<_>>(), vec![2..5]);
        assert_eq!(
            res.into_position_set(8).positions().collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn test_empty_range_result() {
        let res = RangeOrPositions::empty_at(4);
        assert!(res.is_empty());
        assert_eq!(res.ranges().count(), 0);
        assert!(res.into_position_set(4).is_empty());
    }

    #[test]
    fn test_positions_result() {
        let res = RangeOrPositions::from(PositionSet::from_positions(10, [1u32, 2, 7]));
        assert!(!res.is_range());
        assert!(res.as_range().is_none());
        assert_eq!(res.count(), 3);
        assert_eq!(res.ranges().collect::<Vec<_>>(), vec![1..3, 7..8]);
        let widened = res.into_position_set(20);
        assert_eq!(widened.span(), 20);
        assert_eq!(widened.positions().collect::<Vec<_>>(), vec![1, 2, 7]);
    }
}
