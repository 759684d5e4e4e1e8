//! PATH lookup for external tools.

use std::path::{Path, PathBuf};

/// Extensions tried for bare tool names on Windows.
#[cfg(windows)]
const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd"];

/// Directories listed in the `PATH` environment variable.
pub fn path_entries() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).collect())
        .unwrap_or_default()
}

/// Check if a file has any execute permission bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does not shell
/// out to `which`/`where`.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .flat_map(|dir| candidates(dir, tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    let mut found = vec![dir.join(tool)];
    if Path::new(tool).extension().is_none() {
        found.extend(
            EXECUTABLE_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", tool, ext))),
        );
    }
    found
}
