use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::error::{DigestError, Result};
use crate::models::LogEntry;

/// Reads the log document at `path` and returns its entries in file order.
pub fn load_log_file<P: AsRef<Path>>(path: P) -> Result<Vec<LogEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DigestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = parse_log_document(document)?;
    tracing::debug!("loaded {} log entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Accepts either a bare array of entries or an object with a `logs` array.
pub fn parse_log_document(document: Value) -> Result<Vec<LogEntry>> {
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("logs") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                tracing::warn!("`logs` field is not a list, treating as empty");
                Vec::new()
            }
            None => Vec::new(),
        },
        _ => {
            tracing::warn!("log document is neither a list nor an object");
            Vec::new()
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(LogEntry::new(fields)),
            _ => Err(DigestError::InvalidEntry { index }),
        })
        .collect()
}
