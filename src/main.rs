//! cursorverse: build and installer helpers for the CursorVerse cursor themes

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod theme;

#[derive(Parser)]
#[command(name = "cursorverse")]
#[command(about = "Build and installer helpers for CursorVerse", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package the app into a standalone executable with PyInstaller
    BuildExe {
        /// Project directory containing main.py (default: current directory)
        #[arg(long)]
        dir: Option<String>,

        /// Bundler executable
        #[arg(long, default_value = "pyinstaller")]
        bundler: String,

        /// Python interpreter used to install the bundler
        #[arg(long, default_value = "python")]
        python: String,

        /// Do not try to install the bundler when it is missing
        #[arg(long)]
        no_install: bool,
    },

    /// Write install.bat and uninstall.bat into every cursor theme folder
    Generate {
        /// CursorVerse library directory (default: %LOCALAPPDATA%/CursorVerse)
        #[arg(long)]
        base_dir: Option<String>,

        /// Show what would be written without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List cursor theme folders
    List {
        /// CursorVerse library directory (default: %LOCALAPPDATA%/CursorVerse)
        #[arg(long)]
        base_dir: Option<String>,

        /// Only show one category: Anime or Classic
        #[arg(long, short)]
        category: Option<String>,

        /// Output format: table or json (default: table)
        #[arg(long, short, default_value = "table")]
        format: String,
    },

    /// Remove generated install.bat and uninstall.bat files
    Clean {
        /// CursorVerse library directory (default: %LOCALAPPDATA%/CursorVerse)
        #[arg(long)]
        base_dir: Option<String>,

        /// Show what would be deleted without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::BuildExe {
            dir,
            bundler,
            python,
            no_install,
        } => {
            let dir = match dir {
                Some(d) => PathBuf::from(d),
                None => std::env::current_dir().context("Failed to get current directory")?,
            };
            let options = commands::build_exe::BuildOptions {
                dir,
                bundler,
                python,
                install_bundler: !no_install,
            };
            commands::build_exe::execute(&options).context("Failed to build executable")?;
        }

        Commands::Generate { base_dir, dry_run } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::generate::execute(base_dir.as_deref(), dry_run)?;
        }

        Commands::List {
            base_dir,
            category,
            format,
        } => {
            let format = commands::list::ListFormat::from_str(&format)
                .context("Invalid format. Use 'table' or 'json'")?;
            let options = commands::list::ListOptions {
                base_dir,
                category,
                format,
            };
            let output = commands::list::execute(options)?;
            println!("{}", output);
        }

        Commands::Clean {
            base_dir,
            dry_run,
            yes,
        } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::clean::execute(base_dir.as_deref(), dry_run, yes)?;
        }
    }

    Ok(())
}
