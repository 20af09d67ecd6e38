//! Sweep of the shared mod cache against the referenced-mod set.

use crate::services::fs::Filesystem;
use anyhow::{Context, Result};
use camino::Utf8Path;
use std::collections::HashSet;

/// Outcome of one cache sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    /// Sum of sizes of deleted entries.
    pub bytes_freed: u64,

    /// Filenames deleted from the cache.
    pub deleted: Vec<String>,

    /// Filenames that should have been deleted but could not be.
    pub failed: Vec<String>,
}

/// Delete every cache entry whose filename is not in `referenced`.
///
/// Matching is by filename only; referenced entries are left untouched
/// regardless of content or age. A missing cache directory is a normal
/// "nothing to clean" outcome and does not create the directory. Entries that
/// fail to stat or delete are recorded and skipped; their sizes do not count
/// toward `bytes_freed`.
pub fn sweep_mod_cache(
    fs: &dyn Filesystem,
    cache_dir: &Utf8Path,
    referenced: &HashSet<String>,
) -> Result<SweepOutcome> {
    let mut outcome = SweepOutcome::default();

    if !fs.exists(cache_dir) {
        tracing::debug!("No mod cache at {}, nothing to sweep", cache_dir);
        return Ok(outcome);
    }

    let entries = fs
        .list_dir(cache_dir)
        .with_context(|| format!("Failed to list mod cache: {}", cache_dir))?;

    for name in entries {
        if referenced.contains(&name) {
            continue;
        }

        let path = cache_dir.join(&name);
        let size = match fs.file_size(&path) {
            Ok(size) => size,
            Err(err) => {
                tracing::warn!("Failed to stat cached mod {}: {}", name, err);
                outcome.failed.push(name);
                continue;
            }
        };

        match fs.remove_file(&path) {
            Ok(()) => {
                tracing::info!("cleaning up {}", name);
                outcome.bytes_freed += size;
                outcome.deleted.push(name);
            }
            Err(err) => {
                tracing::warn!("Failed to delete cached mod {}: {}", name, err);
                outcome.failed.push(name);
            }
        }
    }

    Ok(outcome)
}
