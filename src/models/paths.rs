use camino::{Utf8Path, Utf8PathBuf};

/// Resolved root locations for one maintenance run.
///
/// Produced by path resolution before the engine starts and handed to the
/// [`MaintenanceRunner`](crate::services::MaintenanceRunner) as explicit
/// resources; no component looks paths up on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenancePaths {
    /// Root of all managed state (packs, global assets, mod cache).
    pub install_root: Utf8PathBuf,

    /// Directory containing one subdirectory per pack.
    pub packs_root: Utf8PathBuf,

    /// Shared asset pool that per-pack asset directories link to.
    pub global_assets_dir: Utf8PathBuf,

    /// Shared cache of downloaded mod files, keyed by filename.
    pub mod_cache_dir: Utf8PathBuf,

    /// The launcher's registration document, when a Minecraft directory is
    /// known. `None` skips the profile reconciliation stage.
    pub launcher_profiles: Option<Utf8PathBuf>,
}

impl MaintenancePaths {
    /// Derive all managed locations from an install root and an optional
    /// Minecraft directory.
    pub fn new(install_root: &Utf8Path, minecraft_dir: Option<&Utf8Path>) -> Self {
        Self {
            install_root: install_root.to_path_buf(),
            packs_root: install_root.join("packs"),
            global_assets_dir: install_root.join("global").join("assets"),
            mod_cache_dir: install_root.join(".modcache"),
            launcher_profiles: minecraft_dir.map(|dir| dir.join("launcher_profiles.json")),
        }
    }
}
