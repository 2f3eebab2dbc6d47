//! Sort command implementation

use anyhow::Result;
use itertools::Itertools;
use tracecol_storage::{SetIdStorage, Storage};

use crate::commands::{check_rows, load_set_id_column};

pub fn run(stable: bool, rows: Vec<u32>, column: String) -> Result<()> {
    let values = load_set_id_column(&column)?;
    let storage = SetIdStorage::new(&values);
    let rows = order(&storage, stable, rows)?;
    println!("{}", rows.iter().join(","));
    Ok(())
}

fn order(storage: &dyn Storage, stable: bool, mut rows: Vec<u32>) -> Result<Vec<u32>> {
    check_rows(&rows, storage.size())?;
    if stable {
        storage.stable_sort(&mut rows);
    } else {
        storage.sort(&mut rows);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use tracecol_storage::SetIdStorage;

    use super::order;

    #[test]
    fn test_order() {
        let values = [0u32, 0, 2, 2, 2, 5];
        let storage = SetIdStorage::new(&values);

        assert_eq!(
            order(&storage, true, vec![5, 4, 0, 3, 1, 2]).unwrap(),
            vec![0, 1, 4, 3, 2, 5]
        );

        let unstable = order(&storage, false, vec![5, 4, 0, 3, 1, 2]).unwrap();
        let sorted_values: Vec<u32> = unstable.iter().map(|&r| values[r as usize]).collect();
        assert_eq!(sorted_values, vec![0, 0, 2, 2, 2, 5]);

        assert!(order(&storage, true, vec![6]).is_err());
    }
}
