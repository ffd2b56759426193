//! Build-exe command - Package the CursorVerse app into a standalone executable
//!
//! Drives PyInstaller from the project directory. Optional assets are only
//! attached when they exist; the entry point is required.

use owo_colors::OwoColorize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Application entry point, required
pub const ENTRY_POINT: &str = "main.py";

/// Application icon, used both as the exe icon and as bundled data
pub const ICON_FILE: &str = "CursorVerse.ico";

/// Name of the produced executable
pub const APP_NAME: &str = "CursorVerse";

/// Optional data files bundled next to the app, in attach order
pub const OPTIONAL_ASSETS: &[(&str, &str)] = &[
    (ICON_FILE, "icon"),
    ("language.json", "translation data"),
    ("nyan-cat-transparent.gif", "animation"),
];

/// Separator between source and destination in `--add-data`
#[cfg(windows)]
pub const ADD_DATA_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const ADD_DATA_SEPARATOR: char = ':';

/// Errors from packaging
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("entry point not found: {}", .0.display())]
    MissingEntryPoint(PathBuf),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("installing {package} failed: {status}")]
    InstallFailed { package: String, status: ExitStatus },

    #[error("{program} exited with {status}")]
    BundlerFailed { program: String, status: ExitStatus },
}

/// Options for the build-exe command
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Project directory holding the entry point and assets
    pub dir: PathBuf,
    /// Bundler executable
    pub bundler: String,
    /// Python interpreter used to install the bundler
    pub python: String,
    /// Install the bundler with pip when it is not available
    pub install_bundler: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            bundler: "pyinstaller".to_string(),
            python: "python".to_string(),
            install_bundler: true,
        }
    }
}

/// A fully resolved bundler invocation
#[derive(Debug, Clone)]
pub struct BundlePlan {
    /// Directory the bundler runs in
    pub dir: PathBuf,
    /// Bundler executable
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Optional assets attached to the bundle: (file, description)
    pub included: Vec<(&'static str, &'static str)>,
    /// Optional assets not found: (file, description)
    pub missing: Vec<(&'static str, &'static str)>,
}

/// Build the bundler invocation for the project in `dir`
pub fn plan_bundle(dir: &Path, bundler: &str) -> Result<BundlePlan, BuildError> {
    let entry = dir.join(ENTRY_POINT);
    if !entry.is_file() {
        return Err(BuildError::MissingEntryPoint(entry));
    }

    let (included, missing): (Vec<_>, Vec<_>) = OPTIONAL_ASSETS
        .iter()
        .copied()
        .partition(|(file, _)| dir.join(file).is_file());

    let has_icon = included.iter().any(|(file, _)| *file == ICON_FILE);

    let mut args = vec!["--onefile".to_string(), "--windowed".to_string()];
    if has_icon {
        args.push(format!("--icon={}", ICON_FILE));
    }
    args.push(format!("--name={}", APP_NAME));
    args.push("--noconsole".to_string());
    args.push("--clean".to_string());
    args.push(ENTRY_POINT.to_string());
    for (file, _) in &included {
        args.push(format!("--add-data={}{}.", file, ADD_DATA_SEPARATOR));
    }

    Ok(BundlePlan {
        dir: dir.to_path_buf(),
        program: bundler.to_string(),
        args,
        included,
        missing,
    })
}

fn run<I, S>(program: &str, args: I, dir: &Path) -> Result<ExitStatus, BuildError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|source| BuildError::Spawn {
            program: program.to_string(),
            source,
        })
}

/// Make sure the bundler runs, installing it with pip if it does not
pub fn ensure_bundler(options: &BuildOptions) -> Result<(), BuildError> {
    let probe = Command::new(&options.bundler)
        .arg("--version")
        .current_dir(&options.dir)
        .output();

    match probe {
        Ok(output) if output.status.success() => {
            println!("{} is already installed", options.bundler);
            return Ok(());
        }
        Ok(output) => debug!(status = %output.status, "bundler probe failed"),
        Err(e) => debug!(error = %e, "bundler probe could not run"),
    }

    if !options.install_bundler {
        // Let the real invocation surface the error
        return Ok(());
    }

    println!("Installing {}...", options.bundler);
    let status = run(
        &options.python,
        ["-m", "pip", "install", "pyinstaller"],
        &options.dir,
    )?;
    if !status.success() {
        return Err(BuildError::InstallFailed {
            package: "pyinstaller".to_string(),
            status,
        });
    }
    println!("{} {} installed", "Done:".green(), options.bundler);
    Ok(())
}

/// Run the bundler to completion
pub fn run_bundle(plan: &BundlePlan) -> Result<(), BuildError> {
    info!(program = %plan.program, args = ?plan.args, "running bundler");
    let status = run(&plan.program, &plan.args, &plan.dir)?;
    if !status.success() {
        return Err(BuildError::BundlerFailed {
            program: plan.program.clone(),
            status,
        });
    }
    Ok(())
}

/// Execute the build-exe command
pub fn execute(options: &BuildOptions) -> Result<(), BuildError> {
    println!("{}", "=".repeat(60));
    println!("  {} - building executable", APP_NAME);
    println!("{}", "=".repeat(60));

    let plan = plan_bundle(&options.dir, &options.bundler)?;

    for (file, what) in &plan.missing {
        println!("{} {} not found: {}", "Warning:".yellow(), what, file);
    }

    ensure_bundler(options)?;

    println!("Building {}.exe...", APP_NAME);
    for (file, what) in &plan.included {
        println!("{} {}: {}", "Added".green(), what, file);
    }

    run_bundle(&plan)?;

    println!();
    println!("{}", "=".repeat(60));
    println!("{} executable built", "Success:".green());
    println!(
        "Output: {}",
        Path::new("dist").join(format!("{}.exe", APP_NAME)).display()
    );
    println!("{}", "=".repeat(60));
    Ok(())
}
