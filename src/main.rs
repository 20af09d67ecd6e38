//! Modpack Maintenance - reconciliation and garbage collection for shared
//! modpack installations.
//!
//! Command-line entry point. One invocation runs one maintenance pass:
//!
//! 1. Load stored preferences and apply command-line overrides
//! 2. Resolve the managed root locations
//! 3. Run the engine over the real filesystem
//! 4. Print the final summary
//!
//! Per-stage progress goes through `tracing` (console plus a daily-rotated
//! file under `logs/`); the summary line is the only direct stdout output.

use anyhow::Result;
use modpack_maintenance::services::OsFilesystem;
use modpack_maintenance::{APP_NAME, ConfigManager, MaintenanceRunner, PathOverrides, VERSION};

fn main() -> Result<()> {
    let mut overrides = PathOverrides::default();
    let mut debug = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--minecraft-dir" | "-m" => {
                if let Some(path) = args.next() {
                    overrides.minecraft_dir = Some(path.into());
                } else {
                    eprintln!("--minecraft-dir requires a path");
                }
            }
            "--root" | "-r" => {
                if let Some(path) = args.next() {
                    overrides.install_root = Some(path.into());
                } else {
                    eprintln!("--root requires a path");
                }
            }
            "--debug" => debug = true,
            "--help" | "-h" => {
                println!("{APP_NAME} v{VERSION}");
                println!("  --minecraft-dir <path>  Override the Minecraft directory");
                println!("  --root <path>           Override the modpack install root");
                println!("  --debug                 Enable debug logging");
                return Ok(());
            }
            _ => {}
        }
    }

    let config_manager = ConfigManager::new("Maintenance Data")?;
    let preferences = config_manager.load_preferences()?;
    let debug = debug || preferences.settings.debug_mode;

    let _guard = modpack_maintenance::logging::setup_logging("logs", "maintenance", debug)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let paths = modpack_maintenance::config::resolve_paths(&preferences, &overrides);
    match &paths.launcher_profiles {
        Some(profiles_path) => {
            tracing::info!("Using launcher profiles at {}", profiles_path);
        }
        None => {
            tracing::info!("No Minecraft directory configured, skipping launcher profiles");
        }
    }
    tracing::info!("Using modpack path {}", paths.install_root);

    let fs = OsFilesystem;
    let runner = MaintenanceRunner::new(&fs);
    let report = runner.run(&paths)?;

    if report.has_failures() {
        tracing::warn!(
            "Completed with {} failed migration(s) and {} failed deletion(s)",
            report.failed_migrations.len(),
            report.failed_deletions.len()
        );
    }

    println!("{}", report.summary());
    Ok(())
}
