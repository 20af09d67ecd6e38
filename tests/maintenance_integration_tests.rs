//! Integration tests for the full maintenance pipeline
//!
//! These tests run the engine over a real temporary directory tree and
//! verify:
//! - Asset migration, cache sweeping, and profile pruning in one pass
//! - Idempotence of a repeated run
//! - The short-circuit when no pack root exists
//! - The abort on a malformed registration document

use camino::{Utf8Path, Utf8PathBuf};
use modpack_maintenance::models::MaintenancePaths;
use modpack_maintenance::services::OsFilesystem;
use modpack_maintenance::MaintenanceRunner;
use std::fs;
use tempfile::TempDir;

fn create_install_root() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, root)
}

fn create_pack(root: &Utf8Path, name: &str, mods: &[(&str, usize)]) {
    let pack_dir = root.join("packs").join(name).join(".minecraft");
    fs::create_dir_all(pack_dir.join("assets")).unwrap();
    fs::write(pack_dir.join("assets").join("indexes.json"), b"{}").unwrap();
    let mods_dir = pack_dir.join("mods");
    fs::create_dir_all(&mods_dir).unwrap();
    for (mod_name, size) in mods {
        fs::write(mods_dir.join(mod_name), vec![0u8; *size]).unwrap();
    }
}

fn create_cache(root: &Utf8Path, entries: &[(&str, usize)]) {
    let cache_dir = root.join(".modcache");
    fs::create_dir_all(&cache_dir).unwrap();
    for (name, size) in entries {
        fs::write(cache_dir.join(name), vec![0u8; *size]).unwrap();
    }
}

fn list_names(dir: &Utf8Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[cfg(unix)]
#[test]
fn test_full_pass_migrates_and_sweeps() {
    let (_temp_dir, root) = create_install_root();
    create_pack(&root, "p1", &[("a.jar", 1), ("b.jar", 1)]);
    create_pack(&root, "p2", &[("b.jar", 1)]);
    create_cache(&root, &[("a.jar", 100), ("b.jar", 200), ("c.jar", 50)]);

    let fs_facade = OsFilesystem;
    let paths = MaintenancePaths::new(&root, None);
    let report = MaintenanceRunner::new(&fs_facade).run(&paths).unwrap();

    // Both asset directories were converted to links
    assert_eq!(report.directories_migrated, 2);
    for pack in ["p1", "p2"] {
        let assets = root.join("packs").join(pack).join(".minecraft").join("assets");
        let meta = fs::symlink_metadata(&assets).unwrap();
        assert!(meta.file_type().is_symlink(), "{assets} should be a link");
        let target = fs::read_link(&assets).unwrap();
        assert_eq!(
            Utf8PathBuf::try_from(target).unwrap(),
            paths.global_assets_dir
        );
    }

    // Only the unreferenced entry was swept
    assert_eq!(report.bytes_freed, 50);
    assert_eq!(report.swept_mods, vec!["c.jar".to_string()]);
    assert_eq!(list_names(&root.join(".modcache")), vec!["a.jar", "b.jar"]);
    assert!(!report.has_failures());
}

#[cfg(unix)]
#[test]
fn test_second_run_is_convergent() {
    let (_temp_dir, root) = create_install_root();
    create_pack(&root, "p1", &[("a.jar", 1)]);
    create_cache(&root, &[("a.jar", 100), ("stale.jar", 40)]);

    let fs_facade = OsFilesystem;
    let paths = MaintenancePaths::new(&root, None);
    let runner = MaintenanceRunner::new(&fs_facade);

    let first = runner.run(&paths).unwrap();
    assert_eq!(first.directories_migrated, 1);
    assert_eq!(first.bytes_freed, 40);

    let second = runner.run(&paths).unwrap();
    assert_eq!(second.directories_migrated, 0);
    assert_eq!(second.bytes_freed, 0);
    assert!(second.swept_mods.is_empty());
}

#[test]
fn test_missing_pack_root_leaves_cache_alone() {
    let (_temp_dir, root) = create_install_root();
    // No packs directory at all, but a populated cache
    create_cache(&root, &[("orphan.jar", 64)]);

    let fs_facade = OsFilesystem;
    let paths = MaintenancePaths::new(&root, None);
    let report = MaintenanceRunner::new(&fs_facade).run(&paths).unwrap();

    assert_eq!(report.bytes_freed, 0);
    assert_eq!(report.directories_migrated, 0);
    // Discovery never ran, so the cache must not have been swept
    assert_eq!(list_names(&root.join(".modcache")), vec!["orphan.jar"]);
}

#[cfg(unix)]
#[test]
fn test_profiles_pruned_for_deleted_packs() {
    let (_temp_dir, root) = create_install_root();
    create_pack(&root, "alive", &[]);
    let minecraft_dir = root.join("minecraft");
    fs::create_dir_all(&minecraft_dir).unwrap();

    let document = serde_json::json!({
        "profiles": {
            "alive": { "gameDir": format!("{}/packs/alive/.minecraft", root) },
            "deleted": { "gameDir": format!("{}/packs/deleted/.minecraft", root) },
            "external": { "gameDir": "/somewhere/else/.minecraft" }
        },
        "settings": { "keepLauncherOpen": true }
    });
    fs::write(
        minecraft_dir.join("launcher_profiles.json"),
        serde_json::to_string_pretty(&document).unwrap(),
    )
    .unwrap();

    let fs_facade = OsFilesystem;
    let paths = MaintenancePaths::new(&root, Some(minecraft_dir.as_path()));
    let report = MaintenanceRunner::new(&fs_facade).run(&paths).unwrap();

    assert_eq!(report.removed_profiles, vec!["deleted".to_string()]);

    let raw = fs::read_to_string(minecraft_dir.join("launcher_profiles.json")).unwrap();
    let reloaded: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let profiles = reloaded["profiles"].as_object().unwrap();
    assert!(profiles.contains_key("alive"));
    assert!(profiles.contains_key("external"));
    assert!(!profiles.contains_key("deleted"));
    assert_eq!(reloaded["settings"]["keepLauncherOpen"], true);
}

#[cfg(unix)]
#[test]
fn test_malformed_profiles_abort_after_earlier_stages() {
    let (_temp_dir, root) = create_install_root();
    create_pack(&root, "p1", &[]);
    create_cache(&root, &[("stale.jar", 10)]);
    let minecraft_dir = root.join("minecraft");
    fs::create_dir_all(&minecraft_dir).unwrap();
    fs::write(minecraft_dir.join("launcher_profiles.json"), "{ not json").unwrap();

    let fs_facade = OsFilesystem;
    let paths = MaintenancePaths::new(&root, Some(minecraft_dir.as_path()));
    let result = MaintenanceRunner::new(&fs_facade).run(&paths);

    assert!(result.is_err());

    // The earlier stages already applied and are not rolled back
    let assets = root.join("packs").join("p1").join(".minecraft").join("assets");
    assert!(fs::symlink_metadata(&assets).unwrap().file_type().is_symlink());
    assert!(!root.join(".modcache").join("stale.jar").exists());
}

#[cfg(unix)]
#[test]
fn test_non_directory_entries_under_pack_root_are_ignored() {
    let (_temp_dir, root) = create_install_root();
    create_pack(&root, "p1", &[("a.jar", 1)]);
    fs::write(root.join("packs").join("README.txt"), b"notes").unwrap();

    let fs_facade = OsFilesystem;
    let paths = MaintenancePaths::new(&root, None);
    let report = MaintenanceRunner::new(&fs_facade).run(&paths).unwrap();

    // Only the real pack migrates; the stray file is not treated as a pack
    assert_eq!(report.directories_migrated, 1);
    assert!(root.join("packs").join("README.txt").exists());
}
