//! Filesystem facade for the maintenance engine.
//!
//! On-disk state is the engine's only source of truth: pack existence, cache
//! contents, and link state are all read straight from the filesystem rather
//! than from any record of past runs. Every such check, and every mutation,
//! goes through the [`Filesystem`] trait so the engine can run against a mock
//! in unit tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;

/// The filesystem surface the engine touches.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Whether `path` exists, following symbolic links.
    fn exists(&self, path: &Utf8Path) -> bool;

    /// Whether `path` is a directory, following symbolic links.
    fn is_dir(&self, path: &Utf8Path) -> bool;

    /// Whether `path` itself is a symbolic link. Not followed; a dangling
    /// link counts.
    fn is_symlink(&self, path: &Utf8Path) -> bool;

    /// Immediate entry names of a directory, not recursive.
    fn list_dir(&self, path: &Utf8Path) -> io::Result<Vec<String>>;

    fn file_size(&self, path: &Utf8Path) -> io::Result<u64>;

    fn create_dir_all(&self, path: &Utf8Path) -> io::Result<()>;

    fn remove_file(&self, path: &Utf8Path) -> io::Result<()>;

    fn remove_dir_all(&self, path: &Utf8Path) -> io::Result<()>;

    /// Create a symbolic link at `link` pointing to `target` (a directory).
    fn symlink_dir(&self, target: &Utf8Path, link: &Utf8Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String>;

    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()>;

    /// Anchor a relative path to the working directory without touching the
    /// filesystem beyond resolving the working directory itself.
    fn absolute(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Utf8Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Utf8Path) -> bool {
        path.is_dir()
    }

    fn is_symlink(&self, path: &Utf8Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Utf8Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in path.read_dir_utf8()? {
            names.push(entry?.file_name().to_string());
        }
        Ok(names)
    }

    fn file_size(&self, path: &Utf8Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }

    fn create_dir_all(&self, path: &Utf8Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Utf8Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir_all(&self, path: &Utf8Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    #[cfg(unix)]
    fn symlink_dir(&self, target: &Utf8Path, link: &Utf8Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    fn symlink_dir(&self, target: &Utf8Path, link: &Utf8Path) -> io::Result<()> {
        std::os::windows::fs::symlink_dir(target, link)
    }

    #[cfg(not(any(unix, windows)))]
    fn symlink_dir(&self, _target: &Utf8Path, _link: &Utf8Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symbolic links unavailable on this platform",
        ))
    }

    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn absolute(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf> {
        let absolute = std::path::absolute(path.as_std_path())?;
        Utf8PathBuf::from_path_buf(absolute).map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("non UTF-8 path: {}", raw.display()),
            )
        })
    }
}
