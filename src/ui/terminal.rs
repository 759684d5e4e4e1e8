//! Interactive terminal UI.

use console::Term;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

use super::list::{DirectoryBrowser, Outcome};
use super::menu::Menu;
use super::progress::InstallProgress;
use super::screen::{run_interaction, TermScreen};
use super::{
    prompt_user, NonInteractiveUI, OutputMode, ProgressHandle, ProgressSpinner, Prompt,
    PromptResult, SpinnerHandle, StatusKind, Theme, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, theme: Theme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// The theme used for every frame and message.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.text.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.dim.apply_to(hint)).ok();
        }
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            writeln!(
                self.term,
                "{} {}",
                kind.styled(&self.theme),
                self.theme.text.apply_to(msg)
            )
            .ok();
        }
    }

    fn show_checkbox(&mut self, checked: bool, label: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.format_checkbox(checked, label)).ok();
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn start_progress(&mut self) -> Box<dyn ProgressHandle> {
        if self.mode.shows_spinners() {
            Box::new(InstallProgress::new(self.theme.clone()))
        } else {
            Box::new(InstallProgress::hidden())
        }
    }

    fn select(&mut self, mut menu: Menu<String>) -> Result<Outcome<String>> {
        let mut screen = TermScreen::open()?;
        run_interaction(&mut menu, &mut screen, &self.theme)
    }

    fn pick_directory(&mut self, mut browser: DirectoryBrowser) -> Result<Outcome<PathBuf>> {
        let mut screen = TermScreen::open()?;
        run_interaction(&mut browser, &mut screen, &self.theme)
    }

    fn wait_for_enter(&mut self) {
        writeln!(
            self.term,
            "\n{}",
            self.theme.dim.apply_to("Press Enter to continue...")
        )
        .ok();
        self.term.read_line().ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode, theme: Theme) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, theme))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
