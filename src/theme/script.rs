//! Batch script generation for installing and resetting cursor themes
//!
//! Both scripts drive the same registry key in two phases: the clear phase
//! deletes `HKCU\Control Panel\Cursors` and recreates it empty, then the set
//! phase (install only) writes one value per cursor role. A refresh through
//! `UpdatePerUserSystemParameters` makes Windows pick up the new values.

use super::mapping::CursorRole;

/// Registry key holding the per-user cursor scheme
pub const CURSORS_KEY: &str = r"HKCU\Control Panel\Cursors";

/// Line terminator used in generated scripts
pub const LINE_ENDING: &str = "\r\n";

/// File name of the generated install script
pub const INSTALL_SCRIPT: &str = "install.bat";

/// File name of the generated uninstall script
pub const UNINSTALL_SCRIPT: &str = "uninstall.bat";

const REFRESH: &str = "rundll32.exe user32.dll,UpdatePerUserSystemParameters";

/// Lines shared by both scripts: quiet echo, UTF-8 code page, spacer
fn header() -> Vec<String> {
    vec![
        "@echo off".to_string(),
        "chcp 65001 >nul".to_string(),
        "echo.".to_string(),
    ]
}

/// Delete the cursor key and recreate it with an empty default value
///
/// The delete swallows its errors so a missing key does not abort the script.
pub fn clear_phase() -> Vec<String> {
    vec![
        format!("reg delete \"{}\" /f >nul 2>&1", CURSORS_KEY),
        format!("reg add \"{}\" /ve /t REG_SZ /d \"\" /f >nul", CURSORS_KEY),
    ]
}

/// One registry write per role, pointing at the file next to the script
pub fn set_phase(roles: &[CursorRole]) -> Vec<String> {
    roles
        .iter()
        .map(|r| {
            format!(
                "reg add \"{}\" /v \"{}\" /t REG_SZ /d \"%~dp0{}\" /f >nul",
                CURSORS_KEY, r.role, r.file
            )
        })
        .collect()
}

/// Ask Windows to reload user parameters, twice in case the first is missed
pub fn refresh_phase() -> Vec<String> {
    vec![REFRESH.to_string(), REFRESH.to_string()]
}

/// Join lines with the script line terminator, terminating the last one too
pub fn render(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push_str(LINE_ENDING);
    }
    out
}

/// Install script for one theme folder
#[derive(Debug, Clone)]
pub struct InstallScript {
    /// Theme folder name shown in the banners
    pub folder_name: String,
    /// Roles to set, already filtered to files present in the folder
    pub roles: Vec<CursorRole>,
}

impl InstallScript {
    pub fn new(folder_name: impl Into<String>, roles: Vec<CursorRole>) -> Self {
        Self {
            folder_name: folder_name.into(),
            roles,
        }
    }

    /// All lines of the script, in output order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = header();
        lines.push(format!("echo  Установка курсора: {}", self.folder_name));
        lines.push("echo  Сброс и применение...".to_string());
        lines.push("echo.".to_string());

        lines.push(":: ШАГ 1: СБРОС КУРСОРОВ".to_string());
        lines.extend(clear_phase());
        lines.push(String::new());

        lines.extend(set_phase(&self.roles));

        lines.push(String::new());
        lines.push(":: Применение".to_string());
        lines.extend(refresh_phase());
        lines.push(String::new());
        lines.push(format!(
            "echo  УСТАНОВЛЕНО! Курсор \"{}\" применён.",
            self.folder_name
        ));
        lines.push(String::new());
        lines.push("exit /b 0".to_string());
        lines
    }

    pub fn render(&self) -> String {
        render(&self.lines())
    }
}

/// Uninstall script lines; identical for every theme folder
pub fn uninstall_lines() -> Vec<String> {
    let mut lines = header();
    lines.push("echo  Сброс курсора на стандартные Windows...".to_string());
    lines.push("echo.".to_string());
    lines.extend(clear_phase());
    lines.extend(refresh_phase());
    lines.push("echo.".to_string());
    lines.push("echo  СБРОШЕНО! Используются стандартные курсоры Windows.".to_string());
    lines.push("echo.".to_string());
    lines.push("exit /b 0".to_string());
    lines
}

pub fn render_uninstall() -> String {
    render(&uninstall_lines())
}
