//! cursorverse library
//!
//! Core functionality for packaging the CursorVerse application and
//! generating Windows installers for its cursor themes.

pub mod config;
pub mod theme;
