//! Command implementations for tracecol-cmd

use anyhow::{Context, Result};
use log::debug;
use tracecol_storage::{StorageKind, read_column};

use crate::utils::validate_file_exists;

pub mod filter;
pub mod generate;
pub mod inspect;
pub mod sort;

/// Reads a column file and returns its set-id values.
///
/// The file contents are fully validated, so the values can be wrapped with
/// `SetIdStorage::new`.
pub fn load_set_id_column(path: &str) -> Result<Vec<u32>> {
    validate_file_exists(path)?;
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {path}"))?;
    let column =
        read_column(&bytes).with_context(|| format!("Failed to decode column file {path}"))?;
    anyhow::ensure!(
        column.kind == StorageKind::SetId,
        "{path} holds a {} column, expected set_id",
        column.kind.name()
    );
    debug!("loaded {} values from {path}", column.values.len());
    Ok(column.values)
}

/// Checks that every row is a valid position in a column of `size` rows.
pub fn check_rows(rows: &[u32], size: u32) -> Result<()> {
    if let Some(row) = rows.iter().find(|&&row| row >= size) {
        anyhow::bail!("Row {row} is out of bounds (the column has {size} rows)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracecol_io::{FileWriter, SealingWrite};
    use tracecol_storage::{SetIdStorage, Storage};

    use super::{check_rows, load_set_id_column};

    #[test]
    fn test_load_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("col.tcol");
        let values = vec![0u32, 0, 2, 2];
        let mut writer = FileWriter::create(&path).unwrap();
        SetIdStorage::new(&values).serialize(&mut writer).unwrap();
        writer.seal().unwrap();

        assert_eq!(load_set_id_column(path.to_str().unwrap()).unwrap(), values);

        let garbage = dir.path().join("garbage");
        std::fs::write(&garbage, b"not a column").unwrap();
        let err = load_set_id_column(garbage.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to decode"));
    }

    #[test]
    fn test_check_rows() {
        check_rows(&[0, 3, 1], 4).unwrap();
        check_rows(&[], 0).unwrap();
        assert!(check_rows(&[4], 4).is_err());
    }
}
