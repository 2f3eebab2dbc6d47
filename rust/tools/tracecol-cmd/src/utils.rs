//! Common utilities for tracecol-cmd

use anyhow::Result;
use std::path::Path;

/// Fails unless `path` names an existing regular file.
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.is_file() {
        if file_path.exists() {
            anyhow::bail!("Path is not a file: {}", path);
        }
        anyhow::bail!("File does not exist: {}", path);
    }
    Ok(())
}

/// Formats a byte count with a binary unit suffix.
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut unit = 0;
    let mut scaled = size as f64;
    while scaled >= 1024.0 && unit + 1 < UNITS.len() {
        scaled /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{size} B")
    } else {
        format!("{scaled:.2} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::{format_size, validate_file_exists};

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.50 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MiB");
    }

    #[test]
    fn test_validate_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_str().unwrap();
        assert!(validate_file_exists(dir_path).is_err());

        let file = dir.path().join("col");
        assert!(validate_file_exists(file.to_str().unwrap()).is_err());
        std::fs::write(&file, b"x").unwrap();
        validate_file_exists(file.to_str().unwrap()).unwrap();
    }
}
