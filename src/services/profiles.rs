//! Reconciliation of the launcher's registration document.
//!
//! The launcher keeps a JSON document of named profiles, each optionally
//! pointing at a game directory. Profiles that point into the managed pack
//! root but whose directory no longer exists are pruned; everything else in
//! the document, including fields this tool knows nothing about, is written
//! back unchanged.

use crate::services::fs::Filesystem;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use thiserror::Error;

/// The launcher registration document.
///
/// Each profile stays a raw JSON object rather than a typed struct: the only
/// field this tool interprets is `gameDir`, read out of the object in place,
/// so a rewrite reproduces every profile's own key order exactly. Every other
/// top-level field round-trips through `extra`. Insertion order is preserved
/// throughout so a rewrite stays diffable against the launcher's own output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherProfiles {
    pub profiles: IndexMap<String, Value>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Errors from the registration stage. Any of these aborts the stage; the
/// migration and sweep stages that already ran are not rolled back.
#[derive(Error, Debug)]
pub enum ProfilesError {
    #[error("Failed to resolve pack root {path}")]
    Root {
        path: Utf8PathBuf,
        source: io::Error,
    },

    #[error("Failed to read launcher profiles at {path}")]
    Read {
        path: Utf8PathBuf,
        source: io::Error,
    },

    #[error("Launcher profiles at {path} are not in the expected format")]
    Malformed {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize launcher profiles")]
    Serialize { source: serde_json::Error },

    #[error("Failed to write launcher profiles at {path}")]
    Write {
        path: Utf8PathBuf,
        source: io::Error,
    },
}

/// Remove every profile that points into `packs_root` at a directory that no
/// longer exists, and write the document back with 2-space indentation.
///
/// A missing document is a no-op. Profiles without a `gameDir`, or whose
/// `gameDir` lies outside `packs_root`, are never touched. Returns the names
/// of the removed profiles.
pub fn reconcile_profiles(
    fs: &dyn Filesystem,
    profiles_path: &Utf8Path,
    packs_root: &Utf8Path,
) -> Result<Vec<String>, ProfilesError> {
    if !fs.exists(profiles_path) {
        tracing::debug!("No launcher profiles at {}", profiles_path);
        return Ok(Vec::new());
    }

    let raw = fs
        .read_to_string(profiles_path)
        .map_err(|source| ProfilesError::Read {
            path: profiles_path.to_path_buf(),
            source,
        })?;
    let mut document: LauncherProfiles =
        serde_json::from_str(&raw).map_err(|source| ProfilesError::Malformed {
            path: profiles_path.to_path_buf(),
            source,
        })?;

    let abs_root = fs
        .absolute(packs_root)
        .map(|path| lexical_normalize(&path))
        .map_err(|source| ProfilesError::Root {
            path: packs_root.to_path_buf(),
            source,
        })?;

    // Decision pass: purely observational, no mutation of the mapping
    let mut to_remove = Vec::new();
    for (name, profile) in &document.profiles {
        let Some(game_dir) = profile.get("gameDir").and_then(Value::as_str) else {
            continue;
        };
        let game_dir = Utf8Path::new(game_dir);

        let abs_dir = match fs.absolute(game_dir) {
            Ok(path) => lexical_normalize(&path),
            Err(err) => {
                tracing::warn!("Skipping profile {} with unresolvable path: {}", name, err);
                continue;
            }
        };
        if !is_strictly_inside(&abs_dir, &abs_root) {
            continue;
        }
        if fs.is_dir(game_dir) {
            continue;
        }

        tracing::info!("removing profile {}", name);
        to_remove.push(name.clone());
    }

    // Removal pass, separate from the iteration that decided it
    for name in &to_remove {
        document.profiles.shift_remove(name);
    }

    let mut serialized = serde_json::to_string_pretty(&document)
        .map_err(|source| ProfilesError::Serialize { source })?;
    serialized.push('\n');
    fs.write(profiles_path, &serialized)
        .map_err(|source| ProfilesError::Write {
            path: profiles_path.to_path_buf(),
            source,
        })?;

    Ok(to_remove)
}

/// Resolve `.` and `..` components textually, without touching the
/// filesystem. Symbolic links are deliberately not resolved; a profile that
/// reaches a pack only through a link outside the pack root stays untouched.
fn lexical_normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut parts: Vec<Utf8Component> = Vec::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match parts.last() {
                Some(Utf8Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Utf8Component::RootDir) | Some(Utf8Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Segment-aware strict containment: `path` is below `root` but not `root`
/// itself. Comparison is case-sensitive.
fn is_strictly_inside(path: &Utf8Path, root: &Utf8Path) -> bool {
    path.starts_with(root) && path != root
}
