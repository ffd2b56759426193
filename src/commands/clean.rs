//! Clean command - Remove generated install/uninstall scripts

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config;
use crate::theme::{folder, script};

/// Find generated scripts in every theme folder under `library`
pub fn find_generated_scripts(library: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for (category, root) in config::category_dirs(library) {
        if !root.is_dir() {
            continue;
        }

        for theme in folder::subdirectories(category, &root)? {
            for name in [script::INSTALL_SCRIPT, script::UNINSTALL_SCRIPT] {
                let path = theme.path.join(name);
                if path.is_file() {
                    found.push(path);
                }
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Delete `paths`, returning (deleted, failed)
fn remove_scripts(paths: &[PathBuf]) -> (usize, usize) {
    let mut deleted = 0;
    let mut failed = 0;

    for path in paths {
        match fs::remove_file(path) {
            Ok(_) => {
                println!("{} {}", "Deleted:".green(), path.display());
                deleted += 1;
            }
            Err(e) => {
                eprintln!("{} {}: {}", "Failed:".red(), path.display(), e);
                failed += 1;
            }
        }
    }

    (deleted, failed)
}

/// Execute the clean command
pub fn execute(base_dir: Option<&str>, dry_run: bool, yes: bool) -> Result<()> {
    let library = config::resolve_library_dir(base_dir)
        .context("Failed to determine CursorVerse library directory")?;

    let scripts = find_generated_scripts(&library)?;

    if scripts.is_empty() {
        println!("No generated installers found.");
        return Ok(());
    }

    println!("Found {} generated script(s):\n", scripts.len());
    for path in &scripts {
        println!("  {}", path.display());
    }

    if dry_run {
        println!("\n{}", "(DRY-RUN) No changes made.".blue());
        println!("Run with --yes to delete these scripts.");
        return Ok(());
    }

    if !yes {
        print!("\nDelete these scripts? (y/N) ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let (deleted, failed) = remove_scripts(&scripts);

    println!(
        "\nRemoved {} script(s), {} failed",
        deleted.to_string().green(),
        if failed > 0 {
            failed.to_string().red().to_string()
        } else {
            "0".to_string()
        }
    );

    Ok(())
}
