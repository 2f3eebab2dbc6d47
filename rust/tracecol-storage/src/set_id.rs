//! Storage for grouping-id ("set id") columns.
//!
//! A set-id column assigns every row the id of the run of rows it belongs to, where
//! the id of a run is the index of its first row. The values are therefore
//! non-decreasing and satisfy `value[i] <= i`:
//!
//! ```text
//! row:    0 1 2 3 4 5
//! value:  0 0 2 2 2 5
//! ```
//!
//! Both properties are exploited by the search kernels. Non-decreasing values turn
//! every comparison into one or two binary searches, and `value[i] <= i` means that
//! no row below `v` can hold the value `v`, so searches for `v` start at row `v`.

use std::ops::Range;

use log::trace;
use tracecol_common::{Error, Result};
use tracecol_io::SealingWrite;
use tracecol_position_set::PositionSet;

use crate::{
    filter::{FilterOp, FilterPredicate, Operand},
    search_result::RangeOrPositions,
    serialization,
    storage::{SearchValidation, Storage, StorageKind},
};

/// Read-only [`Storage`] view over a set-id column.
///
/// The view borrows the values from the table that owns them and allocates nothing
/// beyond the results it returns.
#[derive(Debug, Clone, Copy)]
pub struct SetIdStorage<'a> {
    values: &'a [u32],
}

impl<'a> SetIdStorage<'a> {
    /// Wraps `values` without checking the set-id invariant.
    ///
    /// The caller guarantees that `values` is non-decreasing with `values[i] <= i`;
    /// this is verified only in debug builds. Results over data that violates the
    /// invariant are unspecified.
    ///
    /// Panics: if `values` has more than `u32::MAX` rows.
    pub fn new(values: &'a [u32]) -> SetIdStorage<'a> {
        assert!(
            values.len() <= u32::MAX as usize,
            "set-id column is too long: {}",
            values.len()
        );
        debug_assert!(
            validate_set_ids(values).is_ok(),
            "set-id invariant violated"
        );
        SetIdStorage { values }
    }

    /// Wraps `values` after verifying the set-id invariant.
    pub fn try_new(values: &'a [u32]) -> Result<SetIdStorage<'a>> {
        if values.len() > u32::MAX as usize {
            return Err(Error::invalid_arg(
                "values",
                format!("too many rows: {}", values.len()),
            ));
        }
        validate_set_ids(values)?;
        Ok(SetIdStorage { values })
    }

    pub fn values(&self) -> &'a [u32] {
        self.values
    }

    /// Number of distinct sets (maximal runs of equal values) in the column.
    pub fn set_count(&self) -> u32 {
        self.sets().count() as u32
    }

    /// Iterates over the sets of the column as `(set_id, rows)` pairs, in row order.
    pub fn sets(&self) -> impl Iterator<Item = (u32, Range<u32>)> + 'a {
        let values = self.values;
        values
            .chunk_by(|a, b| a == b)
            .scan(0u32, |start, run| {
                let range = *start..*start + run.len() as u32;
                *start = range.end;
                Some((run[0], range))
            })
    }
}

impl SetIdStorage<'_> {
    /// Resolves the operand of `predicate` to a column value, or to a trivial
    /// all/nothing outcome when the predicate cannot be represented.
    fn resolve(&self, predicate: &FilterPredicate) -> Resolved {
        let operand = match (predicate.op, predicate.operand) {
            // The column has no nulls.
            (FilterOp::IsNull, _) => return Resolved::NoData,
            (FilterOp::IsNotNull, _) => return Resolved::AllData,
            (_, Operand::Null) => return Resolved::NoData,
            (_, Operand::Int(operand)) => operand,
        };

        if operand < 0 {
            match predicate.op {
                FilterOp::Eq | FilterOp::Lt | FilterOp::Le => Resolved::NoData,
                _ => Resolved::AllData,
            }
        } else if operand > u32::MAX as i64 {
            match predicate.op {
                FilterOp::Eq | FilterOp::Gt | FilterOp::Ge => Resolved::NoData,
                _ => Resolved::AllData,
            }
        } else {
            Resolved::Search(operand as u32)
        }
    }

    /// Locates the block of rows equal to `value` within `range`.
    ///
    /// Since `values[i] <= i`, every row below `value` holds a smaller value, so the
    /// lower bound search starts at `max(range.start, value)`. The returned block is
    /// empty (but correctly positioned) when no row in `range` holds `value`.
    fn equal_block(&self, value: u32, range: Range<u32>) -> Range<u32> {
        let start = range.start.max(value.min(range.end));
        let window = &self.values[start as usize..range.end as usize];
        let lower = window.partition_point(|&v| v < value);
        let upper = lower + window[lower..].partition_point(|&v| v <= value);
        start + lower as u32..start + upper as u32
    }

    /// Sorted subset search: the values at `indices` are non-decreasing.
    fn sorted_index_search(&self, op: FilterOp, value: u32, indices: &[u32]) -> PositionSet {
        debug_assert!(
            indices
                .windows(2)
                .all(|w| self.values[w[0] as usize] <= self.values[w[1] as usize]),
            "indices are not sorted by value"
        );
        let lower = indices.partition_point(|&i| self.values[i as usize] < value);
        let upper =
            lower + indices[lower..].partition_point(|&i| self.values[i as usize] <= value);

        let spans = matching_spans(op, 0..indices.len(), lower..upper);
        PositionSet::from_positions(
            self.size(),
            spans
                .into_iter()
                .flat_map(|span| indices[span].iter().copied()),
        )
    }

    fn unsorted_index_search(&self, predicate: &FilterPredicate, indices: &[u32]) -> PositionSet {
        PositionSet::from_positions(
            self.size(),
            indices
                .iter()
                .copied()
                .filter(|&i| predicate.matches(self.values[i as usize])),
        )
    }
}

impl Storage for SetIdStorage<'_> {
    fn kind(&self) -> StorageKind {
        StorageKind::SetId
    }

    fn size(&self) -> u32 {
        self.values.len() as u32
    }

    fn validate_search_constraints(&self, predicate: &FilterPredicate) -> SearchValidation {
        match self.resolve(predicate) {
            Resolved::Search(_) => SearchValidation::Ok,
            Resolved::AllData => SearchValidation::AllData,
            Resolved::NoData => SearchValidation::NoData,
        }
    }

    fn search(&self, predicate: &FilterPredicate, range: Range<u32>) -> RangeOrPositions {
        debug_assert!(
            range.start <= range.end && range.end <= self.size(),
            "search range {range:?} out of bounds (size: {})",
            self.size()
        );
        trace!("set_id search: {predicate} over {range:?}");

        let value = match self.resolve(predicate) {
            Resolved::Search(value) => value,
            Resolved::AllData => return RangeOrPositions::Range(range),
            Resolved::NoData => return RangeOrPositions::empty_at(range.start),
        };

        let block = self.equal_block(value, range.clone());
        let [head, tail] = matching_spans(predicate.op, range, block);
        if predicate.op == FilterOp::Ne {
            RangeOrPositions::Positions(PositionSet::from_ranges(self.size(), [head, tail]))
        } else {
            debug_assert!(tail.is_empty());
            RangeOrPositions::Range(head)
        }
    }

    fn index_search(
        &self,
        predicate: &FilterPredicate,
        indices: &[u32],
        sorted: bool,
    ) -> RangeOrPositions {
        trace!(
            "set_id index search: {predicate} over {} indices (sorted: {sorted})",
            indices.len()
        );
        let set = match self.resolve(predicate) {
            Resolved::AllData => PositionSet::from_positions(self.size(), indices.iter().copied()),
            Resolved::NoData => PositionSet::empty(self.size()),
            Resolved::Search(value) if sorted => {
                self.sorted_index_search(predicate.op, value, indices)
            }
            Resolved::Search(_) => self.unsorted_index_search(predicate, indices),
        };
        RangeOrPositions::Positions(set)
    }

    fn sort(&self, rows: &mut [u32]) {
        trace!("set_id sort: {} rows", rows.len());
        rows.sort_unstable_by_key(|&row| self.values[row as usize]);
    }

    fn stable_sort(&self, rows: &mut [u32]) {
        trace!("set_id stable sort: {} rows", rows.len());
        rows.sort_by_key(|&row| self.values[row as usize]);
    }

    fn serialize(&self, sink: &mut dyn SealingWrite) -> Result<()> {
        serialization::write_column(StorageKind::SetId, self.values, sink)
    }
}

enum Resolved {
    Search(u32),
    AllData,
    NoData,
}

/// Splits a sorted `scope` into the (at most two) spans matching `op`, given the
/// `block` of the scope whose values equal the operand.
///
/// Unused span slots are empty.
fn matching_spans<T: Copy>(op: FilterOp, scope: Range<T>, block: Range<T>) -> [Range<T>; 2] {
    let none = block.end..block.end;
    match op {
        FilterOp::Eq => [block, none],
        FilterOp::Ne => [scope.start..block.start, block.end..scope.end],
        FilterOp::Lt => [scope.start..block.start, none],
        FilterOp::Le => [scope.start..block.end, none],
        FilterOp::Gt => [block.end..scope.end, none],
        FilterOp::Ge => [block.start..scope.end, none],
        FilterOp::IsNull => [scope.start..scope.start, none],
        FilterOp::IsNotNull => [scope, none],
    }
}

/// Verifies the set-id invariant: values are non-decreasing and `values[i] <= i`.
///
/// The error names the first offending row.
pub fn validate_set_ids(values: &[u32]) -> Result<()> {
    let mut prev = 0u32;
    for (row, &value) in values.iter().enumerate() {
        if value as usize > row {
            return Err(Error::invalid_format(
                "set_id",
                format!("row {row} has set id {value} beyond its own position"),
            ));
        }
        if value < prev {
            return Err(Error::invalid_format(
                "set_id",
                format!("row {row} has set id {value} below the preceding {prev}"),
            ));
        }
        prev = value;
    }
    Ok(())
}
