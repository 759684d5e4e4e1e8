//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses, menu choices and key scripts.
//!
//! # Example
//!
//! ```
//! use takeoff::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install_path", "/opt/flutter");
//!
//! // Use ui in code under test...
//! ui.message("Starting setup");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Starting setup"));
//! assert!(ui.has_success("Done!"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use console::Key;

use crate::error::Result;

use super::list::{DirectoryBrowser, Outcome};
use super::menu::Menu;
use super::screen::{run_interaction, Screen};
use super::theme::Theme;
use super::{
    parse_yes, OutputMode, ProgressHandle, Prompt, PromptResult, PromptType, SpinnerHandle,
    StatusKind, UserInterface,
};

/// How a queued menu or picker interaction resolves.
#[derive(Debug, Clone)]
enum Script<V> {
    /// Resolve immediately with this outcome.
    Outcome(Outcome<V>),
    /// Drive the real widget with these keys.
    Keys(Vec<Key>),
}

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured responses.
/// Menus and pickers with nothing queued resolve to `Cancelled`.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    checkboxes: Vec<(bool, String)>,
    spinners: Vec<String>,
    progress: Rc<RefCell<Vec<(u8, String)>>>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
    selections: VecDeque<Script<String>>,
    menus_shown: Vec<String>,
    picks: VecDeque<Script<PathBuf>>,
    pick_starts: Vec<PathBuf>,
    waits: usize,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            interactive: true,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            interactive: true,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Queue the value the next menu commits.
    pub fn queue_selection(&mut self, value: &str) {
        self.selections
            .push_back(Script::Outcome(Outcome::Committed(value.to_string())));
    }

    /// Queue a cancelled menu.
    pub fn queue_menu_cancel(&mut self) {
        self.selections.push_back(Script::Outcome(Outcome::Cancelled));
    }

    /// Queue key presses that drive the next menu.
    pub fn queue_menu_keys(&mut self, keys: Vec<Key>) {
        self.selections.push_back(Script::Keys(keys));
    }

    /// Queue the directory the next picker commits.
    pub fn queue_pick(&mut self, path: impl Into<PathBuf>) {
        self.picks
            .push_back(Script::Outcome(Outcome::Committed(path.into())));
    }

    /// Queue key presses that drive the next directory picker.
    pub fn queue_pick_keys(&mut self, keys: Vec<Key>) {
        self.picks.push_back(Script::Keys(keys));
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured status lines.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all captured checklist lines.
    pub fn checkboxes(&self) -> &[(bool, String)] {
        &self.checkboxes
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get every `(percent, status)` reported to a progress handle.
    pub fn progress(&self) -> Vec<(u8, String)> {
        self.progress.borrow().clone()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Get the titles of all menus that were shown.
    pub fn menus_shown(&self) -> &[String] {
        &self.menus_shown
    }

    /// Get the start directory of every picker that was shown.
    pub fn pick_starts(&self) -> &[PathBuf] {
        &self.pick_starts
    }

    /// How many times the user was asked to press Enter.
    pub fn waits(&self) -> usize {
        self.waits
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a status line containing `msg` was shown with `kind`.
    pub fn has_status(&self, kind: StatusKind, msg: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, m)| *k == kind && m.contains(msg))
    }

    fn answer(prompt: &Prompt, response: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_yes(response)),
            PromptType::Input => PromptResult::String(response.to_string()),
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
    }

    fn show_checkbox(&mut self, checked: bool, label: &str) {
        self.checkboxes.push((checked, label.to_string()));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        // Check queued responses first (for keys called multiple times)
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(Self::answer(prompt, &response));
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(Self::answer(prompt, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        Ok(Self::answer(prompt, ""))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn start_progress(&mut self) -> Box<dyn ProgressHandle> {
        Box::new(MockProgress {
            updates: Rc::clone(&self.progress),
        })
    }

    fn select(&mut self, mut menu: Menu<String>) -> Result<Outcome<String>> {
        self.menus_shown.push(menu.title().to_string());
        match self.selections.pop_front() {
            Some(Script::Outcome(outcome)) => Ok(outcome),
            Some(Script::Keys(keys)) => {
                let mut screen = ScriptedScreen::new(keys);
                run_interaction(&mut menu, &mut screen, &Theme::plain())
            }
            None => Ok(Outcome::Cancelled),
        }
    }

    fn pick_directory(&mut self, mut browser: DirectoryBrowser) -> Result<Outcome<PathBuf>> {
        self.pick_starts.push(browser.current_path().to_path_buf());
        match self.picks.pop_front() {
            Some(Script::Outcome(outcome)) => Ok(outcome),
            Some(Script::Keys(keys)) => {
                let mut screen = ScriptedScreen::new(keys);
                run_interaction(&mut browser, &mut screen, &Theme::plain())
            }
            None => Ok(Outcome::Cancelled),
        }
    }

    fn wait_for_enter(&mut self) {
        self.waits += 1;
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    succeeded: Option<bool>,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// `Some(true)` after success, `Some(false)` after error.
    pub fn succeeded(&self) -> Option<bool> {
        self.succeeded
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.succeeded = Some(true);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.succeeded = Some(false);
    }
}

/// Progress handle that records updates into its [`MockUI`].
#[derive(Debug)]
pub struct MockProgress {
    updates: Rc<RefCell<Vec<(u8, String)>>>,
}

impl ProgressHandle for MockProgress {
    fn set(&mut self, percent: u8, status: &str) {
        self.updates
            .borrow_mut()
            .push((percent, status.to_string()));
    }

    fn finish(&mut self, _msg: &str) {}

    fn abandon(&mut self, _msg: &str) {}
}

/// [`Screen`] fed from a fixed list of keys, capturing every drawn frame.
///
/// Once the script runs out it reports Escape, so an unfinished
/// interaction always ends cancelled instead of blocking.
#[derive(Debug, Default)]
pub struct ScriptedScreen {
    keys: VecDeque<Key>,
    frames: Vec<String>,
    cleared: bool,
    rows: Option<usize>,
}

impl ScriptedScreen {
    /// Create a screen that will replay `keys` in order.
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            keys: keys.into(),
            ..Default::default()
        }
    }

    /// Report a terminal of `rows` lines.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Every frame drawn so far.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Whether the screen was cleared after the interaction ended.
    pub fn was_cleared(&self) -> bool {
        self.cleared
    }
}

impl Screen for ScriptedScreen {
    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Escape))
    }

    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cleared = true;
        Ok(())
    }

    fn rows(&self) -> Option<usize> {
        self.rows
    }
}
