use crate::models::{MaintenancePaths, UserPreferences};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for loading and saving the YAML preference file.
///
/// Manages a single file inside the configuration directory:
/// - `Maintenance Config.yaml`: sandbox flag, Minecraft directory, debug mode
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    preferences_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing configuration files (e.g., "Maintenance Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            preferences_path: config_dir.join("Maintenance Config.yaml"),
            config_dir,
        })
    }

    /// Load the preference file.
    ///
    /// # Returns
    /// The loaded UserPreferences, or defaults if the file doesn't exist
    pub fn load_preferences(&self) -> Result<UserPreferences> {
        if !self.preferences_path.exists() {
            tracing::warn!(
                "Preference file not found at {}, using defaults",
                self.preferences_path
            );
            return Ok(UserPreferences::default());
        }

        let file_contents = fs::read_to_string(&self.preferences_path)
            .with_context(|| format!("Failed to read preferences: {}", self.preferences_path))?;

        let preferences: UserPreferences = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse preferences: {}", self.preferences_path))?;

        tracing::info!("Loaded preferences from {}", self.preferences_path);
        Ok(preferences)
    }

    /// Save the preference file.
    pub fn save_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        let yaml_string = serde_yaml_ng::to_string(preferences)
            .context("Failed to serialize preferences to YAML")?;

        fs::write(&self.preferences_path, yaml_string)
            .with_context(|| format!("Failed to write preferences: {}", self.preferences_path))?;

        tracing::info!("Saved preferences to {}", self.preferences_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

/// Root-location overrides supplied on the command line.
///
/// Any field left unset falls back to the stored preferences.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub minecraft_dir: Option<Utf8PathBuf>,
    pub install_root: Option<Utf8PathBuf>,
}

/// Compute the root locations for one maintenance run.
///
/// Overrides win over preferences. With the sandbox preference on and a known
/// Minecraft directory, managed state lives in a `modpack` directory beside
/// the Minecraft directory; otherwise it lives in the working directory.
/// Pure computation, no filesystem access.
pub fn resolve_paths(preferences: &UserPreferences, overrides: &PathOverrides) -> MaintenancePaths {
    let minecraft_dir = overrides
        .minecraft_dir
        .as_deref()
        .or_else(|| preferences.settings.minecraft_dir());

    let install_root = match &overrides.install_root {
        Some(root) => root.clone(),
        None => match minecraft_dir {
            Some(mc_dir) if preferences.settings.sandbox => {
                let parent = mc_dir.parent().unwrap_or(Utf8Path::new("."));
                parent.join("modpack")
            }
            _ => Utf8PathBuf::from("."),
        },
    };

    MaintenancePaths::new(&install_root, minecraft_dir)
}
