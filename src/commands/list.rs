//! List command - Show theme folders under the CursorVerse library

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config;
use crate::theme::{folder, mapping, script};

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
}

impl ListFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A theme folder with its cursor inventory
#[derive(Debug, Clone, Serialize)]
pub struct ThemeEntry {
    /// Category (Anime, Classic)
    pub category: String,
    /// Folder name
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Files with a cursor extension
    pub cursor_files: usize,
    /// Registry roles this folder would set
    pub mapped_roles: usize,
    /// Whether install.bat is present
    pub has_installer: bool,
}

/// List every theme folder under `library`, sorted by category then name
pub fn list(library: &Path) -> Result<Vec<ThemeEntry>> {
    let mut entries = Vec::new();

    for (category, root) in config::category_dirs(library) {
        if !root.is_dir() {
            continue;
        }

        for theme in folder::subdirectories(category, &root)? {
            let cursor_files = folder::count_cursor_files(&theme.path)?;
            let mapped_roles = mapping::present_roles(&theme.path).len();
            let has_installer = theme.path.join(script::INSTALL_SCRIPT).exists();

            entries.push(ThemeEntry {
                category: theme.category,
                name: theme.name,
                path: theme.path,
                cursor_files,
                mapped_roles,
                has_installer,
            });
        }
    }

    entries.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(entries)
}

/// Options for the list command
pub struct ListOptions {
    /// Library directory override
    pub base_dir: Option<String>,
    /// Only show this category (case-insensitive)
    pub category: Option<String>,
    /// Output format
    pub format: ListFormat,
}

/// Execute the list command and return formatted output
pub fn execute(options: ListOptions) -> Result<String> {
    let library = config::resolve_library_dir(options.base_dir.as_deref())
        .context("Failed to determine CursorVerse library directory")?;

    let mut entries = list(&library)?;

    if let Some(ref category) = options.category {
        entries.retain(|e| e.category.eq_ignore_ascii_case(category));
    }

    match options.format {
        ListFormat::Json => {
            serde_json::to_string_pretty(&entries).context("Failed to serialize theme list")
        }
        ListFormat::Table => Ok(format_table(&entries)),
    }
}

fn format_table(entries: &[ThemeEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Category"),
        Cell::new("Theme"),
        Cell::new("Cursors"),
        Cell::new("Roles"),
        Cell::new("Installer"),
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.category),
            Cell::new(&entry.name),
            Cell::new(entry.cursor_files),
            Cell::new(format!("{}/{}", entry.mapped_roles, mapping::CURSOR_ROLES.len())),
            Cell::new(if entry.has_installer { "yes" } else { "-" }),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} themes found", entries.len()));
    output
}
