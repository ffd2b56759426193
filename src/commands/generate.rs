//! Generate command - Write install/uninstall scripts into theme folders

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

use crate::config;
use crate::theme::installer::{self, RootOutcome};

/// Execute the generate command
pub fn execute(base_dir: Option<&str>, dry_run: bool) -> Result<usize> {
    let library = config::resolve_library_dir(base_dir)
        .context("Failed to determine CursorVerse library directory")?;
    let roots = config::category_dirs(&library);

    info!(library = %library.display(), dry_run, "generating installers");

    let report = installer::generate(&roots, dry_run)?;

    for root in &report.roots {
        match root {
            RootOutcome::Missing { path, .. } => {
                println!("{} folder not found: {}", "Warning:".yellow(), path.display());
            }
            RootOutcome::Scanned { folders, .. } => {
                for theme in folders {
                    let label = if dry_run { "Would create:" } else { "Created:" };
                    println!(
                        "{} install.bat and uninstall.bat in {}",
                        label.green(),
                        theme.path.display()
                    );
                }
            }
        }
    }

    let created = report.created();
    println!();
    if dry_run {
        println!("{}", format!("(DRY-RUN) {} installer(s) would be created.", created).blue());
    } else {
        println!("Done. Installers created: {}", created.to_string().green());
    }

    Ok(created)
}
