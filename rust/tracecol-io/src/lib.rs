//! I/O abstractions for column serialization:
//! - `SealingWrite`: sequential append-only writer with a `seal()` operation, committing
//!   the write activity.
//!
//! Provides a couple of simple implementations: memory-based and file-based.

pub mod file;
pub mod memory;

pub use file::FileWriter;

/// A trait for sequential writing with explicit sealing semantics.
///
/// Writers hand out an append-only stream: every successful
/// [`write_all`](SealingWrite::write_all) extends the data written so far, and
/// [`seal`](SealingWrite::seal) commits it. Column serializers only append; sealing is
/// left to whoever owns the writer, so several columns can share one sink.
///
/// Implementations must be [`Send`] to support transfer between threads, though the
/// trait does not require [`Sync`] as writers require exclusive access through
/// `&mut self`.
pub trait SealingWrite: Send {
    /// Writes the entire buffer, appending it to any previously written data.
    ///
    /// Either all bytes are written successfully, or an error is returned.
    ///
    /// # Errors
    ///
    /// - The underlying storage medium encounters an I/O error
    /// - The writer has already been sealed
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()>;

    /// Seals the writer, flushing any buffered data and committing it.
    ///
    /// Once sealed, the writer does not accept further writes.
    fn seal(&mut self) -> std::io::Result<()>;

    /// Retrieves the storage profile associated with this writer.
    fn storage_profile(&self) -> StorageProfile;
}

/// Characterizes the performance aspects of the underlying storage implementation.
#[derive(Debug, Clone)]
pub struct StorageProfile {
    /// Suggested minimum size for an effective I/O request.
    pub min_io_size: usize,

    /// Suggested maximum size for a single I/O request.
    pub max_io_size: usize,
}

impl StorageProfile {
    /// Clamps a given I/O size to the recommended range defined by this profile.
    ///
    /// The minimum size is guaranteed to be at least 1, and the maximum size is
    /// guaranteed to be at least the minimum size.
    pub fn clamp_io_size(&self, size: usize) -> usize {
        let min = self.min_io_size.max(1).min(self.max_io_size);
        let max = self.max_io_size.max(1).max(min);
        size.clamp(min, max)
    }
}

impl Default for StorageProfile {
    fn default() -> StorageProfile {
        Self {
            min_io_size: 4 * 1024,
            max_io_size: 4 * 1024 * 1024,
        }
    }
}

impl<T> SealingWrite for Box<T>
where
    T: SealingWrite + ?Sized,
{
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.as_mut().write_all(buf)
    }

    fn seal(&mut self) -> std::io::Result<()> {
        self.as_mut().seal()
    }

    fn storage_profile(&self) -> StorageProfile {
        self.as_ref().storage_profile()
    }
}
