//! Column serialization format.
//!
//! A serialized column is a fixed header followed by the raw values, all
//! little-endian:
//!
//! ```text
//! magic   4 bytes   "TCOL"
//! kind    u32       StorageKind tag
//! count   u64       number of values
//! values  count × u32, in row order
//! ```

use byteorder::{ByteOrder, LE, ReadBytesExt, WriteBytesExt};
use log::debug;
use tracecol_common::{Error, Result, verify_data};
use tracecol_io::SealingWrite;

use crate::{set_id::validate_set_ids, storage::StorageKind};

pub const COLUMN_MAGIC: &[u8; 4] = b"TCOL";

pub const HEADER_SIZE: usize = 16;

/// Preferred size of a single write of column values, before clamping to the sink's
/// storage profile.
const VALUE_CHUNK_BYTES: usize = 256 * 1024;

/// A column decoded by [`read_column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedColumn {
    pub kind: StorageKind,
    pub values: Vec<u32>,
}

/// Appends the header and all `values` of a column to `sink`.
///
/// Values are written in chunks sized to the sink's storage profile. Failures reported
/// by the sink are returned as `ErrorKind::Io`, nothing is retried.
pub fn write_column(kind: StorageKind, values: &[u32], sink: &mut dyn SealingWrite) -> Result<()> {
    let mut header = Vec::with_capacity(HEADER_SIZE);
    header.extend_from_slice(COLUMN_MAGIC);
    header.write_u32::<LE>(kind.tag())?;
    header.write_u64::<LE>(values.len() as u64)?;
    sink.write_all(&header)
        .map_err(|e| Error::io("column header", e))?;

    let chunk_len = (sink.storage_profile().clamp_io_size(VALUE_CHUNK_BYTES) / 4).max(1);
    let mut buf = vec![0u8; chunk_len.min(values.len()) * 4];
    for chunk in values.chunks(chunk_len) {
        let bytes = &mut buf[..chunk.len() * 4];
        LE::write_u32_into(chunk, bytes);
        sink.write_all(bytes)
            .map_err(|e| Error::io("column values", e))?;
    }

    debug!("serialized {} column: {} values", kind.name(), values.len());
    Ok(())
}

/// Decodes a column written by [`write_column`].
///
/// Verifies the header, the payload length, and the invariant of the column kind.
pub fn read_column(bytes: &[u8]) -> Result<SerializedColumn> {
    verify_data!(header, bytes.len() >= HEADER_SIZE);
    verify_data!(magic, &bytes[..4] == COLUMN_MAGIC);

    let mut header = &bytes[4..HEADER_SIZE];
    let kind = StorageKind::from_tag(header.read_u32::<LE>()?)?;
    let count = header.read_u64::<LE>()?;
    verify_data!(count, count <= u32::MAX as u64);

    let payload = &bytes[HEADER_SIZE..];
    verify_data!(payload, payload.len() as u64 == count * 4);

    let mut values = vec![0u32; count as usize];
    LE::read_u32_into(payload, &mut values);

    match kind {
        StorageKind::SetId => validate_set_ids(&values)?,
    }

    debug!("deserialized {} column: {} values", kind.name(), values.len());
    Ok(SerializedColumn { kind, values })
}
