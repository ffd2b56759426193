//! Cursor file to registry role mapping
//!
//! Windows reads the cursor for each UI state from a named value under
//! `HKCU\Control Panel\Cursors`. A theme folder ships one file per state,
//! with a fixed file name per role.

use std::path::Path;

/// A cursor file name bound to the registry value it is installed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorRole {
    /// File name inside the theme folder
    pub file: &'static str,
    /// Registry value name (e.g. "Arrow")
    pub role: &'static str,
}

const fn role(file: &'static str, role: &'static str) -> CursorRole {
    CursorRole { file, role }
}

/// Every known cursor file, in the order registry lines are emitted
pub const CURSOR_ROLES: &[CursorRole] = &[
    role("pointer.ani", "Arrow"),
    role("help.ani", "Help"),
    role("work.ani", "WorkingInBackground"),
    role("busy.ani", "Busy"),
    role("cross.ani", "Crosshair"),
    role("text.ani", "IBeam"),
    role("hand.ani", "Hand"),
    role("unavailable.ani", "No"),
    role("vert.ani", "SizeNS"),
    role("horz.ani", "SizeWE"),
    role("dgn1.ani", "SizeNWSE"),
    role("dgn2.ani", "SizeNESW"),
    role("move.ani", "SizeAll"),
    role("alternate.ani", "UpArrow"),
    role("link.ani", "AppStarting"),
    role("person.cur", "Person"),
    role("pin.cur", "Pin"),
];

/// Extensions recognized as cursor files (lowercase, without the dot)
pub const CURSOR_EXTENSIONS: [&str; 2] = ["cur", "ani"];

/// Check whether a file name has a cursor extension (case-insensitive)
///
/// # Example
/// ```
/// use cursorverse::theme::mapping::is_cursor_file;
///
/// assert!(is_cursor_file("Pointer.ANI"));
/// assert!(is_cursor_file("pin.cur"));
/// assert!(!is_cursor_file("preview.png"));
/// ```
pub fn is_cursor_file<P: AsRef<Path>>(name: P) -> bool {
    let name = name.as_ref().as_os_str().to_string_lossy().to_ascii_lowercase();
    CURSOR_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext)))
}

/// Roles whose cursor file exists in `folder`, in declared order
pub fn present_roles(folder: &Path) -> Vec<CursorRole> {
    CURSOR_ROLES
        .iter()
        .filter(|entry| folder.join(entry.file).exists())
        .copied()
        .collect()
}
