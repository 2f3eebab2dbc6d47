//! Naive reference evaluation.
//!
//! These helpers evaluate a per-value predicate by scanning, without relying on any
//! property of the column. Tests compare the optimized kernels against them.

use std::ops::Range;

/// Returns the rows in `range` whose value satisfies `pred`, in ascending order.
pub fn filter_range(values: &[u32], range: Range<u32>, pred: impl Fn(u32) -> bool) -> Vec<u32> {
    range.filter(|&row| pred(values[row as usize])).collect()
}

/// Returns the distinct rows of `rows` whose value satisfies `pred`, in ascending order.
pub fn filter_rows(values: &[u32], rows: &[u32], pred: impl Fn(u32) -> bool) -> Vec<u32> {
    let mut res = rows
        .iter()
        .copied()
        .filter(|&row| pred(values[row as usize]))
        .collect::<Vec<_>>();
    res.sort_unstable();
    res.dedup();
    res
}

/// Returns `true` if the values at `rows` are non-decreasing.
pub fn is_sorted_by_value(values: &[u32], rows: &[u32]) -> bool {
    rows.windows(2)
        .all(|w| values[w[0] as usize] <= values[w[1] as usize])
}
