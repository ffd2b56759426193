//! CLI commands

pub mod build_exe;
pub mod clean;
pub mod generate;
pub mod list;
