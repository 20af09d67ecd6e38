use std::time::Duration;

/// Aggregate outcome of one maintenance run.
///
/// Produced fresh each run and never persisted. Beyond the headline numbers
/// (bytes freed, directories migrated) it records every unit of work that was
/// skipped because of a filesystem failure, so the final report can name them
/// individually.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceReport {
    /// Sum of sizes of cache entries deleted by the sweep.
    pub bytes_freed: u64,

    /// Packs whose asset directory was converted to a link this run.
    pub directories_migrated: usize,

    /// Filenames deleted from the mod cache.
    pub swept_mods: Vec<String>,

    /// Profile names removed from the launcher registration document.
    pub removed_profiles: Vec<String>,

    /// Packs whose asset migration failed and was skipped.
    pub failed_migrations: Vec<String>,

    /// Cache entries that could not be deleted.
    pub failed_deletions: Vec<String>,

    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl MaintenanceReport {
    /// Bytes freed expressed in mebibytes.
    pub fn mib_freed(&self) -> f64 {
        self.bytes_freed as f64 / 1_048_576.0
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_migrations.is_empty() || !self.failed_deletions.is_empty()
    }

    /// The final human-readable summary line.
    pub fn summary(&self) -> String {
        format!(
            "Done! Deleted {:.3} MiB of mods and migrated {} data folders",
            self.mib_freed(),
            self.directories_migrated
        )
    }
}
