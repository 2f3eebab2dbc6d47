//! Per-column storage for the tracecol query engine.
//!
//! A [`Storage`] wraps the values of one column and answers the questions the query
//! executor asks of a single column:
//! - which rows within a range, or among a list of rows, satisfy a filter predicate
//!   ([`Storage::search`], [`Storage::index_search`]);
//! - how to order a list of rows by the column's values ([`Storage::sort`],
//!   [`Storage::stable_sort`]);
//! - how to persist the column ([`Storage::serialize`]).
//!
//! [`SetIdStorage`] implements the capability for grouping-id columns.

pub mod filter;
pub mod search_result;
pub mod serialization;
pub mod set_id;
pub mod storage;

pub use filter::{FilterOp, FilterPredicate, Operand};
pub use search_result::RangeOrPositions;
pub use serialization::{SerializedColumn, read_column};
pub use set_id::{SetIdStorage, validate_set_ids};
pub use storage::{SearchValidation, Storage, StorageKind};
