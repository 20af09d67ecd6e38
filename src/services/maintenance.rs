//! The maintenance pass: one forward sweep over packs, cache, and launcher
//! profiles.
//!
//! The pipeline is linear with no feedback: pack discovery feeds asset
//! migration, the post-migration mod listings feed the cache sweep, and
//! on-disk pack existence at the end of the pass feeds profile
//! reconciliation. Re-running the whole pipeline is safe; every stage's
//! postcondition is stable under repetition.

use crate::models::{MaintenancePaths, MaintenanceReport, Pack};
use crate::services::fs::Filesystem;
use crate::services::{cache, migration, profiles, references};
use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use std::time::Instant;
use thiserror::Error;

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum MaintenanceError {
    #[error("Failed to list pack root {path}")]
    PacksRootUnreachable {
        path: Utf8PathBuf,
        source: io::Error,
    },
}

/// Runs the reconciliation pipeline over one set of resolved paths.
///
/// Owns no state between runs; the filesystem handle and the paths are the
/// only resources, and both are supplied by the caller.
pub struct MaintenanceRunner<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> MaintenanceRunner<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Execute one full maintenance pass and report what it did.
    ///
    /// Individual pack or cache-entry failures are logged, recorded in the
    /// report, and skipped. The run only aborts when the pack root exists but
    /// cannot be listed, or when the registration document fails to
    /// parse/write; in the latter case the migration and sweep work already
    /// done stands.
    pub fn run(&self, paths: &MaintenancePaths) -> Result<MaintenanceReport> {
        let started = Instant::now();
        let mut report = MaintenanceReport::default();

        if !self.fs.exists(&paths.packs_root) {
            tracing::info!("No modpacks directory found at {}", paths.packs_root);
            tracing::info!("Nothing to clean.");
            report.duration = started.elapsed();
            return Ok(report);
        }

        let packs = self.discover_packs(&paths.packs_root)?;
        tracing::info!("Found {} pack(s) under {}", packs.len(), paths.packs_root);

        for pack in &packs {
            match migration::migrate_to_global(
                self.fs,
                &pack.assets_dir(),
                &paths.global_assets_dir,
            ) {
                Ok(true) => report.directories_migrated += 1,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!("Skipping asset migration for pack {}: {:#}", pack.name, err);
                    report.failed_migrations.push(pack.name.clone());
                }
            }
        }

        let referenced = references::collect_referenced_mods(self.fs, &packs);
        tracing::debug!("{} mod(s) referenced by surviving packs", referenced.len());

        match cache::sweep_mod_cache(self.fs, &paths.mod_cache_dir, &referenced) {
            Ok(outcome) => {
                report.bytes_freed = outcome.bytes_freed;
                report.swept_mods = outcome.deleted;
                report.failed_deletions = outcome.failed;
            }
            Err(err) => {
                tracing::warn!("Mod cache sweep failed: {:#}", err);
            }
        }

        if let Some(profiles_path) = &paths.launcher_profiles {
            match profiles::reconcile_profiles(self.fs, profiles_path, &paths.packs_root) {
                Ok(removed) => report.removed_profiles = removed,
                Err(err) => {
                    // The stages that already ran are not rolled back; record
                    // their outcome before the abort surfaces
                    tracing::error!(
                        "Profile reconciliation failed after freeing {} bytes and migrating {} directories",
                        report.bytes_freed,
                        report.directories_migrated
                    );
                    return Err(err.into());
                }
            }
        }

        report.duration = started.elapsed();
        tracing::info!(
            "Maintenance finished in {:.2}s",
            report.duration.as_secs_f64()
        );
        Ok(report)
    }

    fn discover_packs(&self, packs_root: &Utf8Path) -> Result<Vec<Pack>, MaintenanceError> {
        let names =
            self.fs
                .list_dir(packs_root)
                .map_err(|source| MaintenanceError::PacksRootUnreachable {
                    path: packs_root.to_path_buf(),
                    source,
                })?;

        let mut packs: Vec<Pack> = names
            .iter()
            .map(|name| Pack::new(packs_root, name))
            .filter(|pack| self.fs.is_dir(&pack.root))
            .collect();
        // Deterministic order keeps logs and reports stable across runs
        packs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(packs)
    }
}
