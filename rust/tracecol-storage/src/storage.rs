//! The per-column storage capability.

use std::ops::Range;

use tracecol_common::{Error, Result};
use tracecol_io::SealingWrite;

use crate::{filter::FilterPredicate, search_result::RangeOrPositions};

/// Encoding of a column, written as the kind tag of a serialized column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Grouping ids: non-decreasing values with `value[i] <= i`.
    SetId,
}

impl StorageKind {
    pub fn tag(self) -> u32 {
        match self {
            StorageKind::SetId => 1,
        }
    }

    pub fn from_tag(tag: u32) -> Result<StorageKind> {
        match tag {
            1 => Ok(StorageKind::SetId),
            _ => Err(Error::unsupported_kind(tag)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StorageKind::SetId => "set_id",
        }
    }
}

/// Outcome of checking a predicate against what a storage kind can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchValidation {
    /// The predicate has to be evaluated against the values.
    Ok,
    /// Every row in the searched scope matches.
    AllData,
    /// No row in the searched scope matches.
    NoData,
}

/// Filter, sort and serialize operations over a single column, independent of the
/// column's encoding.
///
/// A `Storage` is a cheap view over column data owned elsewhere. All operations
/// are read-only with respect to that data; the caller guarantees that the data
/// does not change while the view exists.
///
/// Row positions are `u32` offsets into the column, in `[0, size())`. Passing a
/// position or range outside that domain is a contract violation: it is caught by
/// debug assertions (or by slice bounds checks) and is never reported as an error.
pub trait Storage {
    /// Encoding of this column.
    fn kind(&self) -> StorageKind;

    /// Number of rows in the column.
    fn size(&self) -> u32;

    /// Decides whether `predicate` needs a scan at all for this kind of column.
    ///
    /// Predicates that cannot be represented by the column (for example null checks
    /// on a column without nulls, or operands outside the value domain) resolve
    /// to [`SearchValidation::AllData`] or [`SearchValidation::NoData`].
    fn validate_search_constraints(&self, predicate: &FilterPredicate) -> SearchValidation;

    /// Returns the rows in `range` that satisfy `predicate`.
    ///
    /// `range` must lie within `[0, size())`.
    fn search(&self, predicate: &FilterPredicate, range: Range<u32>) -> RangeOrPositions;

    /// Returns the rows among `indices` that satisfy `predicate`.
    ///
    /// `indices` may come in any order. When `sorted` is `true` the caller asserts that
    /// the column values at `indices` are non-decreasing, which enables a binary search;
    /// an untrue hint yields an unspecified result. `sorted = false` is always safe.
    ///
    /// The result is expressed in row positions (not offsets into `indices`).
    fn index_search(
        &self,
        predicate: &FilterPredicate,
        indices: &[u32],
        sorted: bool,
    ) -> RangeOrPositions;

    /// Reorders `rows` in place so that the column values at `rows` are non-decreasing.
    /// The relative order of rows with equal values is unspecified.
    fn sort(&self, rows: &mut [u32]);

    /// Like [`Storage::sort`], but rows with equal values keep their relative order.
    fn stable_sort(&self, rows: &mut [u32]);

    /// Appends the entire column, all values in row order, to `sink`.
    ///
    /// The sink is not sealed. A failure reported by the sink is returned as is.
    fn serialize(&self, sink: &mut dyn SealingWrite) -> Result<()>;
}
