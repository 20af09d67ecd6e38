use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// User preferences from `Maintenance Config.yaml`.
///
/// Contains the stored settings consulted when no command-line overrides are
/// given: whether packs live in a sandbox beside the Minecraft directory, and
/// where that Minecraft directory is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(rename = "Maintenance_Settings")]
    pub settings: MaintenanceSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceSettings {
    /// Keep managed state beside the Minecraft directory instead of the
    /// working directory.
    #[serde(rename = "Sandbox", default)]
    pub sandbox: bool,

    #[serde(rename = "Minecraft Dir", default)]
    pub minecraft_dir: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl MaintenanceSettings {
    /// The stored Minecraft directory, treating an empty string as unset.
    pub fn minecraft_dir(&self) -> Option<&Utf8Path> {
        if self.minecraft_dir.is_empty() {
            None
        } else {
            Some(Utf8Path::new(&self.minecraft_dir))
        }
    }
}

impl Default for MaintenanceSettings {
    fn default() -> Self {
        Self {
            sandbox: false,
            minecraft_dir: String::new(),
            debug_mode: false,
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            settings: MaintenanceSettings::default(),
        }
    }
}
