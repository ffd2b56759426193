//! Cursor theme folders and the installer scripts generated for them

pub mod folder;
pub mod installer;
pub mod mapping;
pub mod script;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use folder::ThemeFolder;
#[allow(unused_imports)]
pub use mapping::{CursorRole, CURSOR_ROLES};
