//! Injectable access to the host for dependency probes.
//!
//! Checks never call `Command` or `std::env` directly; they go through a
//! [`ProbeContext`] so tests can script every answer.

use std::path::{Path, PathBuf};

use crate::shell::{path_entries, resolve_tool_path, run_captured, CommandOutput};

/// Host operations used by [`DependencyChecker`](super::DependencyChecker).
pub struct ProbeContext<'a> {
    /// Run a program, returning its output, or `None` when it cannot be started.
    pub run: &'a dyn Fn(&str, &[&str]) -> Option<CommandOutput>,
    /// Read an environment variable; empty values count as unset.
    pub env: &'a dyn Fn(&str) -> Option<String>,
    /// Check whether a path exists.
    pub exists: &'a dyn Fn(&Path) -> bool,
    /// Locate a tool on PATH.
    pub which: &'a dyn Fn(&str) -> Option<PathBuf>,
}

/// Build the default `ProbeContext` for production use.
pub fn default_context() -> ProbeContext<'static> {
    ProbeContext {
        run: &|program, args| match run_captured(program, args) {
            Ok(output) => Some(output),
            Err(e) => {
                tracing::debug!("probe {} failed: {}", program, e);
                None
            }
        },
        env: &|key| std::env::var(key).ok().filter(|v| !v.is_empty()),
        exists: &|path| path.exists(),
        which: &|tool| resolve_tool_path(tool, &path_entries()),
    }
}

/// Name of the adb binary inside `platform-tools`.
pub fn adb_binary() -> &'static str {
    if cfg!(windows) {
        "adb.exe"
    } else {
        "adb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_reads_path() {
        let ctx = default_context();
        assert_eq!((ctx.env)("TAKEOFF_SURELY_UNSET_VARIABLE"), None);
        assert!((ctx.exists)(Path::new(".")));
        assert!((ctx.which)("takeoff-definitely-not-installed").is_none());
        assert!((ctx.run)("takeoff-definitely-not-installed", &[]).is_none());
    }

    #[test]
    fn adb_binary_name() {
        assert!(adb_binary().starts_with("adb"));
    }
}
