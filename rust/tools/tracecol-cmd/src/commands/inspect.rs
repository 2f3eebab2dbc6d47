//! Inspect command implementation

use std::ops::Range;

use anyhow::Result;
use tracecol_storage::{SetIdStorage, Storage};

use crate::{commands::load_set_id_column, utils::format_size};

#[derive(Debug, PartialEq, Eq)]
struct ColumnSummary {
    rows: u32,
    set_count: u32,
    /// Id and rows of the first of the largest sets.
    largest_set: Option<(u32, Range<u32>)>,
}

pub fn run(verbose: bool, column: String) -> Result<()> {
    let values = load_set_id_column(&column)?;
    let storage = SetIdStorage::new(&values);
    let summary = summarize(&storage);

    println!("Column:      {column}");
    println!("Kind:        {}", storage.kind().name());
    println!("Rows:        {}", summary.rows);
    println!(
        "Value bytes: {}",
        format_size(summary.rows as u64 * std::mem::size_of::<u32>() as u64)
    );
    println!("Sets:        {}", summary.set_count);
    if let Some((id, rows)) = &summary.largest_set {
        println!("Largest set: {id} ({} rows, [{}, {}))", rows.len(), rows.start, rows.end);
    }

    if verbose {
        println!();
        for (id, rows) in storage.sets() {
            println!("  set {id}: rows [{}, {})", rows.start, rows.end);
        }
    }
    Ok(())
}

fn summarize(storage: &SetIdStorage) -> ColumnSummary {
    let mut set_count = 0;
    let mut largest_set: Option<(u32, Range<u32>)> = None;
    for (id, rows) in storage.sets() {
        set_count += 1;
        if largest_set
            .as_ref()
            .is_none_or(|(_, largest)| rows.len() > largest.len())
        {
            largest_set = Some((id, rows));
        }
    }
    ColumnSummary {
        rows: storage.size(),
        set_count,
        largest_set,
    }
}

#[cfg(test)]
mod tests {
    use tracecol_storage::SetIdStorage;

    use super::{ColumnSummary, summarize};

    #[test]
    fn test_summarize() {
        let values = [0u32, 0, 2, 2, 2, 5, 5, 5];
        assert_eq!(
            summarize(&SetIdStorage::new(&values)),
            ColumnSummary {
                rows: 8,
                set_count: 3,
                largest_set: Some((2, 2..5)),
            }
        );

        assert_eq!(
            summarize(&SetIdStorage::new(&[])),
            ColumnSummary {
                rows: 0,
                set_count: 0,
                largest_set: None,
            }
        );
    }
}
