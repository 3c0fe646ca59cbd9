use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DigestError, Result};
use crate::models::LogEntry;

/// The last `limit` entries, in their original order.
pub fn recent(entries: &[LogEntry], limit: usize) -> &[LogEntry] {
    &entries[entries.len().saturating_sub(limit)..]
}

/// Overwrites `path` with the most recent `limit` entries as a 2-space
/// indented JSON array. Returns how many entries were written.
pub fn write_recent<P: AsRef<Path>>(path: P, entries: &[LogEntry], limit: usize) -> Result<usize> {
    let path = path.as_ref();
    let tail = recent(entries, limit);

    let io_err = |source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, tail).map_err(|source| DigestError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    out.flush().map_err(io_err)?;

    tracing::debug!("wrote {} entries to {}", tail.len(), path.display());
    Ok(tail.len())
}
