//! Error types for Takeoff operations.
//!
//! This module defines [`TakeoffError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TakeoffError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `TakeoffError::Other`) for unexpected errors
//! - An unreadable directory or a cancelled menu is not an error; those are
//!   ordinary states of the list and browser components

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Takeoff operations.
#[derive(Debug, Error)]
pub enum TakeoffError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The interactive terminal could not be initialised.
    #[error("Interactive terminal unavailable: {message}")]
    TerminalUnavailable { message: String },

    /// External command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// External tool is not installed or not on PATH.
    #[error("Tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// A step of the SDK installation failed.
    #[error("Installation step '{step}' failed: {message}")]
    InstallFailed { step: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Takeoff operations.
pub type Result<T> = std::result::Result<T, TakeoffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = TakeoffError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = TakeoffError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn terminal_unavailable_displays_message() {
        let err = TakeoffError::TerminalUnavailable {
            message: "stdout is not a tty".into(),
        };
        assert!(err.to_string().contains("stdout is not a tty"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = TakeoffError::CommandFailed {
            command: "flutter doctor -v".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("flutter doctor -v"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn tool_not_found_displays_tool() {
        let err = TakeoffError::ToolNotFound {
            tool: "flutter".into(),
        };
        assert!(err.to_string().contains("flutter"));
    }

    #[test]
    fn install_failed_displays_step_and_message() {
        let err = TakeoffError::InstallFailed {
            step: "Extracting files...".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Extracting files"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TakeoffError = io_err.into();
        assert!(matches!(err, TakeoffError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: TakeoffError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
