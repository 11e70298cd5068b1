//! Identification of the running shim.
//!
//! The tool name comes from the path of the executing image, not from
//! `argv[0]`, so it does not depend on how the caller spelled the command.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Path of the currently running executable.
pub fn current_exe() -> Result<PathBuf> {
    std::env::current_exe().map_err(Error::CurrentExe)
}

/// Tool name for an executable path: its file name without extension.
///
/// `C:\shims\git.exe` gives `git`, `/opt/shims/php` gives `php`.
pub fn tool_name(exe: &Path) -> Result<String> {
    exe.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::NoToolName(exe.to_path_buf()))
}

/// Directory holding the executable, where the global tool table lives.
pub fn exe_dir(exe: &Path) -> PathBuf {
    exe.parent().map(Path::to_path_buf).unwrap_or_default()
}
