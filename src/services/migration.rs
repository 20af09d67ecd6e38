//! Conversion of per-pack asset directories into links to the shared pool.
//!
//! Every pack ships with its own copy of the asset tree; since assets are
//! identical across packs, each copy is replaced by a symbolic link to one
//! global directory. The conversion is idempotent: a pack that already links
//! to the pool is left alone.

use crate::services::fs::Filesystem;
use anyhow::{Context, Result};
use camino::Utf8Path;

/// Convert `local_dir` into a symbolic link to `global_dir`.
///
/// Creates `global_dir` when absent. Returns `true` when a conversion
/// happened, `false` when `local_dir` is already a link. Whatever occupies
/// `local_dir` is deleted first; callers must only pass directories whose
/// contents can be re-downloaded, never user-created data.
pub fn migrate_to_global(
    fs: &dyn Filesystem,
    local_dir: &Utf8Path,
    global_dir: &Utf8Path,
) -> Result<bool> {
    if !fs.exists(global_dir) {
        fs.create_dir_all(global_dir)
            .with_context(|| format!("Failed to create global directory: {}", global_dir))?;
    }

    if fs.is_symlink(local_dir) {
        return Ok(false);
    }

    tracing::info!("Converting {} to a global directory", local_dir);

    if fs.is_dir(local_dir) {
        fs.remove_dir_all(local_dir)
            .with_context(|| format!("Failed to remove local directory: {}", local_dir))?;
    } else if fs.exists(local_dir) {
        fs.remove_file(local_dir)
            .with_context(|| format!("Failed to remove local entry: {}", local_dir))?;
    }

    let target = fs
        .absolute(global_dir)
        .with_context(|| format!("Failed to resolve global directory: {}", global_dir))?;
    fs.symlink_dir(&target, local_dir)
        .with_context(|| format!("Failed to link {} -> {}", local_dir, target))?;

    Ok(true)
}
