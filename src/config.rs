//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Theme categories scanned by the installer generator, in scan order
pub const CATEGORIES: [&str; 2] = ["Anime", "Classic"];

/// Get the CursorVerse library directory
/// - Windows: %LOCALAPPDATA%/CursorVerse/
/// - macOS: ~/Library/Application Support/CursorVerse/
/// - Linux: ~/.local/share/CursorVerse/
pub fn library_dir() -> Result<PathBuf> {
    let local = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(local.join("CursorVerse"))
}

/// Resolve the library directory, preferring an explicit override
pub fn resolve_library_dir(base_dir: Option<&str>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => library_dir(),
    }
}

/// Category roots under a library directory, paired with their names
pub fn category_dirs(library: &Path) -> Vec<(&'static str, PathBuf)> {
    CATEGORIES
        .iter()
        .map(|name| (*name, library.join(name)))
        .collect()
}
