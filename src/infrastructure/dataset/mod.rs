//! Golden dataset artifact on disk.
//!
//! A single JSON array of QA items, pretty-printed so regenerations diff
//! cleanly. Loading validates the artifact before any request is issued.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::domain::errors::{HarnessError, HarnessResult};
use crate::domain::models::QaItem;

/// Overwrite `path` with `items`, creating parent directories.
pub fn write_dataset(path: &Path, items: &[QaItem]) -> HarnessResult<()> {
    let write_err = |source| HarnessError::DatasetWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut json = serde_json::to_string_pretty(items)?;
    json.push('\n');
    std::fs::write(path, json).map_err(write_err)
}

/// Read and validate the dataset at `path`.
pub fn load_dataset(path: &Path) -> HarnessResult<Vec<QaItem>> {
    if !path.exists() {
        return Err(HarnessError::DatasetMissing {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| HarnessError::DatasetMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let items: Vec<QaItem> =
        serde_json::from_str(&raw).map_err(|e| HarnessError::DatasetMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    validate_unique_ids(&items)?;
    debug!(path = %path.display(), items = items.len(), "dataset loaded");
    Ok(items)
}

fn validate_unique_ids(items: &[QaItem]) -> HarnessResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(HarnessError::DuplicateItemId(item.id.clone()));
        }
    }
    Ok(())
}
