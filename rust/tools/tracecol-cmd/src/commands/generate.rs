//! Generate command implementation

use anyhow::{Context, Result};
use log::info;
use tracecol_io::{FileWriter, SealingWrite};
use tracecol_storage::{SetIdStorage, Storage};
use tracecol_testkit::data_gen::generate_set_ids;

use crate::utils::format_size;

pub fn run(rows: u32, seed: u64, new_set_probability: f64, output: String) -> Result<()> {
    let values = generate(rows, seed, new_set_probability)?;
    let written = write(&values, &output)?;
    println!(
        "Wrote {} rows in {} sets to {output} ({})",
        values.len(),
        SetIdStorage::new(&values).set_count(),
        format_size(written)
    );
    Ok(())
}

fn generate(rows: u32, seed: u64, new_set_probability: f64) -> Result<Vec<u32>> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&new_set_probability),
        "New set probability must be within [0, 1], got {new_set_probability}"
    );
    Ok(generate_set_ids(rows as usize, new_set_probability, seed))
}

/// Writes the column to a new file at `path` and returns the file size.
fn write(values: &[u32], path: &str) -> Result<u64> {
    let storage = SetIdStorage::try_new(values)?;
    let mut writer =
        FileWriter::create(path).with_context(|| format!("Failed to create {path}"))?;
    storage
        .serialize(&mut writer)
        .with_context(|| format!("Failed to write column to {path}"))?;
    writer
        .seal()
        .with_context(|| format!("Failed to seal {path}"))?;
    info!("generated set-id column {path}: {} rows", values.len());

    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {path}"))?
        .len();
    Ok(size)
}

#[cfg(test)]
mod tests {
    use crate::commands::load_set_id_column;

    use super::{generate, write};

    #[test]
    fn test_generate_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen.tcol");
        let path = path.to_str().unwrap();

        let values = generate(1000, 7, 0.1).unwrap();
        assert_eq!(values.len(), 1000);
        let size = write(&values, path).unwrap();
        assert_eq!(size, 16 + 4 * 1000);
        assert_eq!(load_set_id_column(path).unwrap(), values);

        // The output file is never overwritten.
        assert!(write(&values, path).is_err());
    }

    #[test]
    fn test_rejects_bad_probability() {
        assert!(generate(10, 0, 1.5).is_err());
        assert!(generate(10, 0, -0.1).is_err());
        assert!(generate(10, 0, f64::NAN).is_err());
    }
}
