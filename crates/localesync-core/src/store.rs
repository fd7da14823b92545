//! JSON document store for flat key → string locale mappings.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::LocaleSyncError;

/// Flat key → text mapping. `BTreeMap` keeps keys in ascending order.
pub type Mapping = BTreeMap<String, String>;

/// Load a mapping from `path`, or return `fallback` if the file is missing,
/// unreadable, or not a JSON object.
///
/// Entries whose value is not a string are skipped one by one; the rest of
/// the document is kept.
pub fn load(path: &Path, fallback: Mapping) -> Mapping {
    if !path.exists() {
        debug!("{} not found, starting empty", path.display());
        return fallback;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("failed to read {}: {e}", path.display());
            return fallback;
        }
    };

    let object = match serde_json::from_str::<Map<String, Value>>(&content) {
        Ok(object) => object,
        Err(e) => {
            warn!("ignoring malformed {}: {e}", path.display());
            return fallback;
        }
    };

    let mapping: Mapping = object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            other => {
                warn!("{}: skipping non-string value for {key}: {other}", path.display());
                None
            }
        })
        .collect();

    info!("loaded {} entries from {}", mapping.len(), path.display());
    mapping
}

/// Write `mapping` to `path` as pretty JSON with a trailing newline.
///
/// Overwrites the whole file in place; there is no temp-file rename, so a
/// crash mid-write can leave it truncated.
pub fn save(path: &Path, mapping: &Mapping) -> Result<(), LocaleSyncError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut body = serde_json::to_string_pretty(mapping)?;
    body.push('\n');
    std::fs::write(path, body)?;

    debug!("wrote {} entries to {}", mapping.len(), path.display());
    Ok(())
}
