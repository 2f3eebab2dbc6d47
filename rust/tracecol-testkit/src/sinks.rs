//! Sinks with scripted behavior.

use tracecol_io::{SealingWrite, StorageProfile};

/// An in-memory sink that fails once more than `capacity` bytes have been written.
///
/// A write that would exceed the capacity fails without appending anything.
pub struct FailingSink {
    data: Vec<u8>,
    capacity: usize,
    max_io_size: usize,
}

impl FailingSink {
    pub fn new(capacity: usize) -> FailingSink {
        FailingSink {
            data: Vec::new(),
            capacity,
            max_io_size: StorageProfile::default().max_io_size,
        }
    }

    /// Limits the preferred write size reported by the sink's storage profile.
    pub fn with_max_io_size(mut self, max_io_size: usize) -> FailingSink {
        self.max_io_size = max_io_size;
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl SealingWrite for FailingSink {
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        if self.data.len() + buf.len() > self.capacity {
            return Err(std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "sink capacity exceeded",
            ));
        }
        self.data.extend_from_slice(buf);
        Ok(())
    }

    fn seal(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    fn storage_profile(&self) -> StorageProfile {
        StorageProfile {
            min_io_size: 1,
            max_io_size: self.max_io_size,
        }
    }
}
