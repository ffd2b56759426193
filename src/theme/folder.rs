//! Theme folder discovery under the category roots

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::mapping;

/// A direct subdirectory of a category root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFolder {
    /// Category the folder belongs to (e.g. "Anime")
    pub category: String,
    /// Folder name, used in script banners
    pub name: String,
    /// Full path to the folder
    pub path: PathBuf,
}

/// List the immediate subdirectories of a category root
///
/// Order follows the directory listing. Callers check that `root` exists.
/// Entries that cannot be resolved (e.g. dangling symlinks) are skipped;
/// failing to read `root` itself is an error.
pub fn subdirectories(category: &str, root: &Path) -> Result<Vec<ThemeFolder>> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| format!("Failed to read: {}", root.display()));
            }
            Err(e) => {
                debug!(error = %e, "unreadable entry, skipping");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        folders.push(ThemeFolder {
            category: category.to_string(),
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.into_path(),
        });
    }

    Ok(folders)
}

/// Count files with a cursor extension directly inside `folder`
pub fn count_cursor_files(folder: &Path) -> Result<usize> {
    let entries =
        fs::read_dir(folder).with_context(|| format!("Failed to read: {}", folder.display()))?;

    let mut count = 0;
    for entry in entries.flatten() {
        if mapping::is_cursor_file(entry.file_name()) {
            count += 1;
        }
    }
    Ok(count)
}

/// Check whether `folder` holds at least one cursor file
pub fn has_cursor_files(folder: &Path) -> Result<bool> {
    let entries =
        fs::read_dir(folder).with_context(|| format!("Failed to read: {}", folder.display()))?;

    Ok(entries
        .flatten()
        .any(|entry| mapping::is_cursor_file(entry.file_name())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdirectories_skips_files() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("Sakura")).unwrap();
        fs::create_dir(root.path().join("Neko")).unwrap();
        fs::write(root.path().join("notes.txt"), b"").unwrap();

        let mut names: Vec<_> = subdirectories("Anime", root.path())
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Neko", "Sakura"]);
    }

    #[test]
    fn test_subdirectories_not_recursive() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("Outer").join("Inner")).unwrap();

        let folders = subdirectories("Classic", root.path()).unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Outer");
        assert_eq!(folders[0].category, "Classic");
        assert_eq!(folders[0].path, root.path().join("Outer"));
    }

    #[cfg(unix)]
    #[test]
    fn test_subdirectories_skips_dangling_symlink() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("Good")).unwrap();
        std::os::unix::fs::symlink(root.path().join("gone"), root.path().join("Broken")).unwrap();

        let folders = subdirectories("Anime", root.path()).unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Good");
    }

    #[test]
    fn test_subdirectories_unreadable_root_is_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(subdirectories("Anime", &root.path().join("missing")).is_err());
    }

    #[test]
    fn test_has_cursor_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_cursor_files(dir.path()).unwrap());

        fs::write(dir.path().join("preview.png"), b"").unwrap();
        assert!(!has_cursor_files(dir.path()).unwrap());

        fs::write(dir.path().join("Custom.CUR"), b"").unwrap();
        assert!(has_cursor_files(dir.path()).unwrap());
    }

    #[test]
    fn test_count_cursor_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pointer.ani"), b"").unwrap();
        fs::write(dir.path().join("extra.cur"), b"").unwrap();
        fs::write(dir.path().join("install.bat"), b"").unwrap();
        assert_eq!(count_cursor_files(dir.path()).unwrap(), 2);
    }
}
