//! Installer generation over the category roots

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::folder::{self, ThemeFolder};
use super::mapping;
use super::script::{self, InstallScript, INSTALL_SCRIPT, UNINSTALL_SCRIPT};

/// What happened to one category root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootOutcome {
    /// Root directory does not exist; nothing was scanned
    Missing { category: String, path: PathBuf },
    /// Root was scanned; `folders` received installers
    Scanned {
        category: String,
        path: PathBuf,
        folders: Vec<ThemeFolder>,
    },
}

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// One outcome per category root, in scan order
    pub roots: Vec<RootOutcome>,
}

impl GenerateReport {
    /// Number of folders that received installers
    pub fn created(&self) -> usize {
        self.roots
            .iter()
            .map(|root| match root {
                RootOutcome::Scanned { folders, .. } => folders.len(),
                RootOutcome::Missing { .. } => 0,
            })
            .sum()
    }
}

/// Write `install.bat` and `uninstall.bat` into a theme folder
pub fn write_installers(theme: &ThemeFolder) -> Result<()> {
    let install = InstallScript::new(&theme.name, mapping::present_roles(&theme.path));
    write_script(&theme.path.join(INSTALL_SCRIPT), &install.render())?;
    write_script(
        &theme.path.join(UNINSTALL_SCRIPT),
        &script::render_uninstall(),
    )?;
    Ok(())
}

fn write_script(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.as_bytes())
        .with_context(|| format!("Failed to write: {}", path.display()))
}

/// Generate installers for every qualifying folder under `roots`
///
/// With `dry_run` the qualifying folders are reported but nothing is written.
pub fn generate(roots: &[(&str, PathBuf)], dry_run: bool) -> Result<GenerateReport> {
    let mut report = GenerateReport::default();

    for (category, root) in roots {
        if !root.is_dir() {
            report.roots.push(RootOutcome::Missing {
                category: category.to_string(),
                path: root.clone(),
            });
            continue;
        }

        let mut created = Vec::new();
        for theme in folder::subdirectories(category, root)? {
            if !folder::has_cursor_files(&theme.path)? {
                debug!(folder = %theme.path.display(), "no cursor files, skipping");
                continue;
            }

            if !dry_run {
                write_installers(&theme)?;
            }
            created.push(theme);
        }

        report.roots.push(RootOutcome::Scanned {
            category: category.to_string(),
            path: root.clone(),
            folders: created,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    fn set_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|l| l.contains(" /v \""))
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_generates_for_cursor_folders_only() {
        let lib = tempfile::tempdir().unwrap();
        let anime = lib.path().join("Anime");
        let with = anime.join("Sylviarill");
        let without = anime.join("Wallpapers");
        fs::create_dir_all(&with).unwrap();
        fs::create_dir_all(&without).unwrap();
        touch(&with.join("pointer.ani"));
        touch(&without.join("preview.png"));

        let report = generate(&config::category_dirs(lib.path()), false).unwrap();

        assert_eq!(report.created(), 1);
        assert!(with.join(INSTALL_SCRIPT).exists());
        assert!(with.join(UNINSTALL_SCRIPT).exists());
        assert_eq!(fs::read_dir(&without).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_root_does_not_stop_other_root() {
        let lib = tempfile::tempdir().unwrap();
        let theme = lib.path().join("Classic").join("Aero");
        fs::create_dir_all(&theme).unwrap();
        touch(&theme.join("busy.ani"));

        let report = generate(&config::category_dirs(lib.path()), false).unwrap();

        assert!(matches!(
            &report.roots[0],
            RootOutcome::Missing { category, .. } if category == "Anime"
        ));
        assert!(matches!(
            &report.roots[1],
            RootOutcome::Scanned { folders, .. } if folders.len() == 1
        ));
        assert!(theme.join(INSTALL_SCRIPT).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_does_not_stop_generation() {
        let lib = tempfile::tempdir().unwrap();
        let good = lib.path().join("Anime").join("Good");
        let aero = lib.path().join("Classic").join("Aero");
        fs::create_dir_all(&good).unwrap();
        fs::create_dir_all(&aero).unwrap();
        touch(&good.join("pointer.ani"));
        touch(&aero.join("busy.ani"));
        std::os::unix::fs::symlink(
            lib.path().join("missing"),
            lib.path().join("Anime").join("Broken"),
        )
        .unwrap();

        let report = generate(&config::category_dirs(lib.path()), false).unwrap();

        assert_eq!(report.created(), 2);
        assert!(good.join(INSTALL_SCRIPT).exists());
        assert!(aero.join(INSTALL_SCRIPT).exists());
    }

    #[test]
    fn test_install_lists_present_roles_in_declared_order() {
        let lib = tempfile::tempdir().unwrap();
        let theme = lib.path().join("Anime").join("Pair");
        fs::create_dir_all(&theme).unwrap();
        touch(&theme.join("hand.ani"));
        touch(&theme.join("pointer.ani"));
        touch(&theme.join("unmapped.cur"));

        generate(&config::category_dirs(lib.path()), false).unwrap();

        let install = fs::read_to_string(theme.join(INSTALL_SCRIPT)).unwrap();
        let sets = set_lines(&install);
        assert_eq!(sets.len(), 2);
        assert!(sets[0].contains("/v \"Arrow\"") && sets[0].contains("%~dp0pointer.ani"));
        assert!(sets[1].contains("/v \"Hand\"") && sets[1].contains("%~dp0hand.ani"));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let lib = tempfile::tempdir().unwrap();
        let theme = lib.path().join("Classic").join("Mono");
        fs::create_dir_all(&theme).unwrap();
        touch(&theme.join("text.ani"));
        touch(&theme.join("pin.cur"));
        let roots = config::category_dirs(lib.path());

        generate(&roots, false).unwrap();
        let first = fs::read(theme.join(INSTALL_SCRIPT)).unwrap();
        generate(&roots, false).unwrap();
        let second = fs::read(theme.join(INSTALL_SCRIPT)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_uninstall_identical_across_folders() {
        let lib = tempfile::tempdir().unwrap();
        let a = lib.path().join("Anime").join("A");
        let b = lib.path().join("Classic").join("B");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        touch(&a.join("pointer.ani"));
        touch(&b.join("person.cur"));

        generate(&config::category_dirs(lib.path()), false).unwrap();

        let ua = fs::read(a.join(UNINSTALL_SCRIPT)).unwrap();
        let ub = fs::read(b.join(UNINSTALL_SCRIPT)).unwrap();
        assert_eq!(ua, ub);
    }

    #[test]
    fn test_overwrites_existing_scripts() {
        let lib = tempfile::tempdir().unwrap();
        let theme = lib.path().join("Anime").join("Old");
        fs::create_dir_all(&theme).unwrap();
        touch(&theme.join("pointer.ani"));
        fs::write(theme.join(INSTALL_SCRIPT), "stale").unwrap();

        generate(&config::category_dirs(lib.path()), false).unwrap();

        let install = fs::read_to_string(theme.join(INSTALL_SCRIPT)).unwrap();
        assert!(install.starts_with("@echo off\r\n"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let lib = tempfile::tempdir().unwrap();
        let theme = lib.path().join("Anime").join("Dry");
        fs::create_dir_all(&theme).unwrap();
        touch(&theme.join("pointer.ani"));

        let report = generate(&config::category_dirs(lib.path()), true).unwrap();

        assert_eq!(report.created(), 1);
        assert!(!theme.join(INSTALL_SCRIPT).exists());
        assert!(!theme.join(UNINSTALL_SCRIPT).exists());
    }

    #[test]
    fn test_folder_with_only_unmapped_cursor_still_qualifies() {
        let lib = tempfile::tempdir().unwrap();
        let theme = lib.path().join("Anime").join("Odd");
        fs::create_dir_all(&theme).unwrap();
        touch(&theme.join("custom.CUR"));

        generate(&config::category_dirs(lib.path()), false).unwrap();

        let install = fs::read_to_string(theme.join(INSTALL_SCRIPT)).unwrap();
        assert!(set_lines(&install).is_empty());
        assert!(install.contains("reg delete"));
    }
}
