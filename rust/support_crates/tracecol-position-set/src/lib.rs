//! Explicit sets of row positions.
//!
//! A [`PositionSet`] names an arbitrary subset of the rows of a column. It is the
//! "heavy" half of a search result: predicates whose matches form one contiguous
//! block are reported as a plain range, everything else as a `PositionSet`.

pub mod iter;
pub mod position_set;
#[cfg(test)]
mod tests;

pub use position_set::PositionSet;
