use camino::{Utf8Path, Utf8PathBuf};

/// A single modpack installation under the pack root.
///
/// Packs are created and destroyed by external tooling; the engine only
/// observes them. Each pack carries a semi-isolated `.minecraft` tree whose
/// `assets` and `mods` subdirectories are the two locations maintenance
/// touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    pub name: String,
    pub root: Utf8PathBuf,
}

impl Pack {
    pub fn new(packs_root: &Utf8Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            root: packs_root.join(name),
        }
    }

    /// The pack's local asset directory (migration target).
    pub fn assets_dir(&self) -> Utf8PathBuf {
        self.root.join(".minecraft").join("assets")
    }

    /// The pack's local mod directory (reference source).
    pub fn mods_dir(&self) -> Utf8PathBuf {
        self.root.join(".minecraft").join("mods")
    }
}
