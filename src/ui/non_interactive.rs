//! Non-interactive UI for pipes and headless environments.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Result, TakeoffError};

use super::list::{DirectoryBrowser, Outcome};
use super::menu::Menu;
use super::progress::{format_progress_bar, DEFAULT_BAR_WIDTH};
use super::theme::Theme;
use super::{
    parse_yes, OutputMode, ProgressHandle, Prompt, PromptResult, PromptType, SpinnerHandle,
    StatusKind, UserInterface,
};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "TAKEOFF_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Menus and directory pickers cannot run without a terminal and resolve to
/// `Cancelled`. Prompts are answered from `TAKEOFF_PROMPT_<KEY>` variables,
/// then from their defaults.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: Theme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            theme: Theme::plain(),
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: Theme::plain(),
        }
    }

    /// The line echoed for a prompt answered without asking.
    fn answered_line(&self, prompt: &Prompt, result: &PromptResult) -> String {
        match result {
            PromptResult::Bool(yes) => format!(
                "{} {}",
                self.theme.format_confirm(&prompt.question),
                if *yes { "yes" } else { "no" }
            ),
            PromptResult::String(value) => format!("? {}: {}", prompt.question, value),
        }
    }

    fn answer(prompt: &Prompt, value: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_yes(value)),
            PromptType::Input => PromptResult::String(value.to_string()),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", kind.icon(), msg);
        }
    }

    fn show_checkbox(&mut self, checked: bool, label: &str) {
        if self.mode.shows_status() {
            println!("  {}", self.theme.format_checkbox(checked, label));
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let value = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref());

        if let Some(value) = value {
            let result = Self::answer(prompt, value);
            if self.mode.shows_status() {
                println!("{}", self.answered_line(prompt, &result));
            }
            return Ok(result);
        }

        Err(TakeoffError::TerminalUnavailable {
            message: format!(
                "cannot prompt for '{}' without a terminal (set {})",
                prompt.key, env_key
            ),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner {
            theme: self.theme.clone(),
        })
    }

    fn start_progress(&mut self) -> Box<dyn ProgressHandle> {
        Box::new(LineProgress {
            show: self.mode.shows_spinners(),
            theme: self.theme.clone(),
        })
    }

    fn select(&mut self, menu: Menu<String>) -> Result<Outcome<String>> {
        tracing::debug!("menu '{}' cancelled: not interactive", menu.title());
        Ok(Outcome::Cancelled)
    }

    fn pick_directory(&mut self, browser: DirectoryBrowser) -> Result<Outcome<PathBuf>> {
        tracing::debug!(
            "directory picker at {} cancelled: not interactive",
            browser.current_path().display()
        );
        Ok(Outcome::Cancelled)
    }

    fn wait_for_enter(&mut self) {}

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints its final line only.
struct LineSpinner {
    theme: Theme,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}

/// Progress that prints one static bar per update.
struct LineProgress {
    show: bool,
    theme: Theme,
}

impl ProgressHandle for LineProgress {
    fn set(&mut self, percent: u8, status: &str) {
        if self.show {
            println!(
                "{} {}",
                format_progress_bar(percent, DEFAULT_BAR_WIDTH, &self.theme),
                status
            );
        }
    }

    fn finish(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn abandon(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
