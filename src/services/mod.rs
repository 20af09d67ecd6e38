//! Services module - the reconciliation engine proper.
//!
//! Everything here is framework-agnostic business logic with no dependency on
//! the CLI layer. Each stage is an explicit operation over resources passed
//! in by the caller; nothing holds an ambient handle between runs.
//!
//! # Components
//!
//! - [`Filesystem`] / [`OsFilesystem`]: the facade all disk access goes
//!   through, mockable in tests
//! - [`migration`]: converts per-pack asset directories into links to the
//!   shared global pool
//! - [`references`]: collects the set of mod filenames still referenced by
//!   surviving packs
//! - [`cache`]: sweeps the shared mod cache against that set
//! - [`profiles`]: prunes launcher registration entries pointing at deleted
//!   packs
//! - [`MaintenanceRunner`]: sequences the stages once and aggregates the
//!   [`MaintenanceReport`](crate::models::MaintenanceReport)
//!
//! The stages run in a fixed order because each consumes the filesystem state
//! the previous one left behind; none of them feeds back into an earlier one.

pub mod cache;
pub mod fs;
pub mod maintenance;
pub mod migration;
pub mod profiles;
pub mod references;

pub use cache::{SweepOutcome, sweep_mod_cache};
pub use fs::{Filesystem, OsFilesystem};
pub use maintenance::{MaintenanceError, MaintenanceRunner};
pub use migration::migrate_to_global;
pub use profiles::{LauncherProfiles, ProfilesError, reconcile_profiles};
pub use references::collect_referenced_mods;
