//! Collection of mod filenames still referenced by surviving packs.

use crate::models::Pack;
use crate::services::fs::Filesystem;
use std::collections::HashSet;

/// Union of the immediate mod filenames of every pack that has a mod
/// directory.
///
/// Packs without a mod directory contribute nothing. A pack whose mod
/// directory cannot be listed is logged and skipped; the remaining packs
/// still contribute.
pub fn collect_referenced_mods(fs: &dyn Filesystem, packs: &[Pack]) -> HashSet<String> {
    let mut referenced = HashSet::new();

    for pack in packs {
        let mods_dir = pack.mods_dir();
        if !fs.exists(&mods_dir) {
            continue;
        }
        match fs.list_dir(&mods_dir) {
            Ok(names) => referenced.extend(names),
            Err(err) => {
                tracing::warn!("Failed to list mods for pack {}: {}", pack.name, err);
            }
        }
    }

    referenced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fs::MockFilesystem;
    use camino::Utf8Path;

    fn pack(name: &str) -> Pack {
        Pack::new(Utf8Path::new("/modpack/packs"), name)
    }

    #[test]
    fn test_union_across_packs() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_list_dir().returning(|path| {
            if path.as_str().contains("/p1/") {
                Ok(vec!["a.jar".to_string(), "b.jar".to_string()])
            } else {
                Ok(vec!["b.jar".to_string(), "c.jar".to_string()])
            }
        });

        let referenced = collect_referenced_mods(&fs, &[pack("p1"), pack("p2")]);

        let mut names: Vec<&str> = referenced.iter().map(String::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["a.jar", "b.jar", "c.jar"]);
    }

    #[test]
    fn test_pack_without_mod_directory_contributes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        // list_dir must never be called when the directory is absent

        let referenced = collect_referenced_mods(&fs, &[pack("p1")]);
        assert!(referenced.is_empty());
    }

    #[test]
    fn test_unlistable_pack_is_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_list_dir().returning(|path| {
            if path.as_str().contains("/p1/") {
                Err(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "denied",
                ))
            } else {
                Ok(vec!["c.jar".to_string()])
            }
        });

        let referenced = collect_referenced_mods(&fs, &[pack("p1"), pack("p2")]);
        assert_eq!(referenced.len(), 1);
        assert!(referenced.contains("c.jar"));
    }
}
