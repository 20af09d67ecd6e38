// Modpack Maintenance - reconciliation and garbage collection for shared
// modpack installations.
//
// This is the library crate containing the maintenance engine and data
// structures. The binary crate (main.rs) provides the command-line entry
// point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigManager, PathOverrides};
pub use models::{MaintenancePaths, MaintenanceReport, Pack, UserPreferences};
pub use services::{Filesystem, MaintenanceRunner, OsFilesystem};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
