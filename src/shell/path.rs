//! Search-path lookup for executables.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Find an executable on the system `PATH`.
///
/// On Windows the candidates are expanded with `PATHEXT`, so `npm`
/// resolves to `npm.cmd`.
pub fn which(program: &str) -> Option<PathBuf> {
    resolve_tool_path(program, &parse_system_path(), &executable_extensions())
}

/// Check whether an executable is available on the system `PATH`.
pub fn is_on_path(program: &str) -> bool {
    which(program).is_some()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. A program name
/// that already contains a directory is checked as-is instead of being
/// searched for.
pub fn resolve_tool_path(
    tool: &str,
    path_entries: &[PathBuf],
    extensions: &[String],
) -> Option<PathBuf> {
    let tool_path = Path::new(tool);
    if tool_path.components().count() > 1 {
        return candidate_names(tool_path, extensions)
            .into_iter()
            .find(|p| is_executable(p));
    }

    path_entries.iter().find_map(|dir| {
        candidate_names(&dir.join(tool), extensions)
            .into_iter()
            .find(|p| is_executable(p))
    })
}

/// Executable file extensions to try, from `PATHEXT` on Windows.
///
/// Empty on Unix, where executability is a permission bit.
pub fn executable_extensions() -> Vec<String> {
    if !cfg!(windows) {
        return Vec::new();
    }
    std::env::var("PATHEXT")
        .map(|value| parse_pathext(&value))
        .unwrap_or_else(|_| parse_pathext(".COM;.EXE;.BAT;.CMD"))
}

fn parse_pathext(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

// A name that already carries an extension is only tried as-is; the bare
// `npm` shell script that ships next to `npm.cmd` must not win on Windows.
fn candidate_names(base: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if extensions.is_empty() || base.extension().is_some() {
        return vec![base.to_path_buf()];
    }
    extensions
        .iter()
        .map(|ext| {
            let mut name: OsString = base.as_os_str().to_os_string();
            name.push(ext);
            PathBuf::from(name)
        })
        .collect()
}

/// Check if a path is an executable file.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
