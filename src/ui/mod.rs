//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes and headless environments
//! - [`list`] navigation core, [`Menu`] and the directory picker
//! - Prompts, spinners and progress bars
//!
//! # Example
//!
//! ```
//! use takeoff::ui::{create_ui, OutputMode, Theme};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet, Theme::plain());
//! ui.show_header("Checking Dependencies");
//! ui.success("All required dependencies are installed!");
//! ```

pub mod list;
pub mod menu;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod picker;
pub mod progress;
pub mod prompts;
pub mod screen;
pub mod spinner;
pub mod terminal;
pub mod theme;

use std::path::PathBuf;

pub use list::{DirectoryBrowser, Entry, Navigation, Outcome, SelectList};
pub use menu::{menu_action, Menu, MenuAction};
pub use mock::{MockProgress, MockSpinner, MockUI, ScriptedScreen};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use picker::{picker_action, PickerAction};
pub use progress::{format_progress_bar, InstallProgress};
pub use prompts::prompt_user;
pub use screen::{run_interaction, Interaction, Screen, TermScreen};
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ColorSpec, Theme, ThemeOptions};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a dim contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Show a line prefixed with a status icon.
    fn show_status(&mut self, kind: StatusKind, msg: &str);

    /// Show a checklist line.
    fn show_checkbox(&mut self, checked: bool, label: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Start a percentage progress display.
    fn start_progress(&mut self) -> Box<dyn ProgressHandle>;

    /// Let the user choose one entry of a menu.
    fn select(&mut self, menu: Menu<String>) -> Result<Outcome<String>>;

    /// Let the user choose a directory.
    fn pick_directory(&mut self, browser: DirectoryBrowser) -> Result<Outcome<PathBuf>>;

    /// Pause until the user acknowledges.
    fn wait_for_enter(&mut self);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// Handle for a percentage progress display.
pub trait ProgressHandle {
    /// Move to `percent` (0-100) with a status line.
    fn set(&mut self, percent: u8, status: &str);

    /// Finish the display.
    fn finish(&mut self, msg: &str);

    /// Abandon the display after a failure.
    fn abandon(&mut self, msg: &str);
}

/// Icon class for [`UserInterface::show_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Check mark.
    Success,
    /// Cross.
    Error,
    /// Warning sign.
    Warning,
    /// Information sign.
    Info,
    /// Plain bullet.
    Other,
}

impl StatusKind {
    /// The icon shown for this status.
    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Success => "✓",
            StatusKind::Error => "✗",
            StatusKind::Warning => "⚠",
            StatusKind::Info => "ℹ",
            StatusKind::Other => "•",
        }
    }

    /// The icon styled for this status.
    pub fn styled(&self, theme: &Theme) -> String {
        let style = match self {
            StatusKind::Success => &theme.success,
            StatusKind::Error => &theme.error,
            StatusKind::Warning => &theme.warning,
            StatusKind::Info => &theme.text,
            StatusKind::Other => &theme.dim,
        };
        style.apply_to(self.icon()).to_string()
    }
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and mocks).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// A yes/no question.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some(default.to_string()),
        }
    }

    /// A free-form text question.
    pub fn input(key: &str, question: &str, default: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool, accepting `y`/`yes`/`true` for string answers.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::String(s) => parse_yes(s),
        }
    }
}

/// Interpret a typed answer as yes/no.
pub fn parse_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string() {
        assert_eq!(PromptResult::Bool(true).as_string(), "true");
        assert_eq!(PromptResult::String("hello".into()).as_string(), "hello");
    }

    #[test]
    fn prompt_result_as_bool() {
        assert!(PromptResult::Bool(true).as_bool());
        assert!(PromptResult::String(" Yes ".into()).as_bool());
        assert!(!PromptResult::String("nope".into()).as_bool());
    }

    #[test]
    fn confirm_prompt_stores_default() {
        let prompt = Prompt::confirm("reinstall", "Reinstall?", false);
        assert!(matches!(prompt.prompt_type, PromptType::Confirm));
        assert_eq!(prompt.default.as_deref(), Some("false"));
    }

    #[test]
    fn input_prompt_without_default() {
        let prompt = Prompt::input("path", "Path?", None);
        assert!(matches!(prompt.prompt_type, PromptType::Input));
        assert!(prompt.default.is_none());
    }

    #[test]
    fn status_icons() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Error.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Info.icon(), "ℹ");
        assert_eq!(StatusKind::Other.icon(), "•");
        assert_eq!(StatusKind::Success.styled(&Theme::plain()), "✓");
    }

    #[test]
    fn parse_yes_variants() {
        for yes in ["y", "Y", "yes", "true", "1"] {
            assert!(parse_yes(yes));
        }
        for no in ["", "n", "no", "maybe"] {
            assert!(!parse_yes(no));
        }
    }
}
