//! External command execution.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, TakeoffError};

use super::path::{path_entries, resolve_tool_path};

/// Result of running an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output followed by standard error.
    pub output: String,

    /// Whether the command exited with code 0.
    pub success: bool,
}

impl CommandOutput {
    /// First non-empty line of the combined output, trimmed.
    pub fn first_line(&self) -> Option<&str> {
        self.output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}

/// Run `program` with `args`, blocking until it exits.
///
/// Output of both streams is captured and returned together. There is no
/// timeout. A program that cannot be found yields
/// [`TakeoffError::ToolNotFound`]; a non-zero exit is reported through
/// [`CommandOutput::success`], not as an error.
pub fn run_captured(program: &str, args: &[&str]) -> Result<CommandOutput> {
    let resolved = locate(program).ok_or_else(|| TakeoffError::ToolNotFound {
        tool: program.to_string(),
    })?;

    tracing::debug!("running {} {}", resolved.display(), args.join(" "));

    let output = Command::new(&resolved)
        .args(args)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TakeoffError::ToolNotFound {
                tool: program.to_string(),
            },
            _ => TakeoffError::Io(e),
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    tracing::debug!("{} exited with {:?}", program, output.status.code());

    Ok(CommandOutput {
        exit_code: output.status.code(),
        output: combined,
        success: output.status.success(),
    })
}

/// Run `program` and require it to succeed.
///
/// Returns the combined output on success and
/// [`TakeoffError::CommandFailed`] otherwise.
pub fn run_checked(program: &str, args: &[&str]) -> Result<CommandOutput> {
    let result = run_captured(program, args)?;
    if result.success {
        Ok(result)
    } else {
        Err(TakeoffError::CommandFailed {
            command: std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" "),
            code: result.exit_code,
        })
    }
}

/// Paths are used as-is; bare names are looked up on PATH.
fn locate(program: &str) -> Option<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return as_path.is_file().then(|| as_path.to_path_buf());
    }
    resolve_tool_path(program, &path_entries())
}
