//! Key bindings and rendering for the directory browser.

use std::path::PathBuf;

use console::Key;

use super::list::{DirectoryBrowser, DirectoryLister, Navigation, Outcome, TargetKind};
use super::screen::Interaction;
use super::theme::Theme;

/// Lines a picker frame uses besides its rows, plus the line the cursor
/// rests on after the frame.
const PICKER_CHROME_LINES: usize = 9;

/// What a key press means to the directory picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Move the cursor.
    Navigate(Navigation),
    /// Open the highlighted directory.
    Enter,
    /// Choose the directory being browsed.
    SelectCurrent,
    /// Show or hide dot-directories.
    ToggleHidden,
    /// Leave without choosing.
    Cancel,
}

/// Map a key press to a picker action.
pub fn picker_action(key: &Key) -> Option<PickerAction> {
    let action = match key {
        Key::ArrowUp | Key::Char('k') => PickerAction::Navigate(Navigation::Up),
        Key::ArrowDown | Key::Char('j') => PickerAction::Navigate(Navigation::Down),
        Key::PageUp => PickerAction::Navigate(Navigation::PageUp),
        Key::PageDown => PickerAction::Navigate(Navigation::PageDown),
        Key::Home => PickerAction::Navigate(Navigation::Home),
        Key::End => PickerAction::Navigate(Navigation::End),
        Key::Enter => PickerAction::Enter,
        Key::Char('s') | Key::Char('S') => PickerAction::SelectCurrent,
        Key::Char('h') | Key::Char('H') => PickerAction::ToggleHidden,
        Key::Escape | Key::CtrlC => PickerAction::Cancel,
        _ => return None,
    };
    Some(action)
}

impl<L: DirectoryLister> DirectoryBrowser<L> {
    /// Apply a picker action.
    pub fn apply(&mut self, action: PickerAction) {
        match action {
            PickerAction::Navigate(nav) => self.navigate(nav),
            PickerAction::Enter => {
                self.enter();
            }
            PickerAction::SelectCurrent => self.select_current(),
            PickerAction::ToggleHidden => self.toggle_hidden(),
            PickerAction::Cancel => self.cancel(),
        }
    }
}

impl<L: DirectoryLister> Interaction for DirectoryBrowser<L> {
    type Value = PathBuf;

    fn handle_key(&mut self, key: &Key) {
        if let Some(action) = picker_action(key) {
            self.apply(action);
        }
    }

    fn outcome(&self) -> Option<Outcome<PathBuf>> {
        DirectoryBrowser::outcome(self)
    }

    fn fit_rows(&mut self, rows: usize) {
        self.limit_viewport(rows.saturating_sub(PICKER_CHROME_LINES));
    }

    fn render(&self, theme: &Theme) -> String {
        let header = format!("📁 Select Directory: {}", self.current_path().display());
        let mut lines = vec![
            format!("{}", theme.title.apply_to(&header)),
            format!(
                "{}",
                theme
                    .border
                    .apply_to("─".repeat(console::measure_text_width(&header)))
            ),
            String::new(),
        ];

        let list = self.list();
        for row in list.rows() {
            let marker = if row.is_cursor { "→ " } else { "  " };
            let icon = match row.entry.value.kind {
                TargetKind::Parent => "⬆",
                TargetKind::Directory => "📁",
            };
            let name = if row.is_cursor {
                theme.selected.apply_to(row.entry.label.as_str())
            } else {
                theme.text.apply_to(row.entry.label.as_str())
            };
            lines.push(format!("{}{} {}", marker, icon, name));
        }

        if self.is_listing_empty() {
            lines.push(format!("  {}", theme.dim.apply_to("(empty directory)")));
        }

        if let Some(pagination) = list.pagination() {
            lines.push(String::new());
            lines.push(format!("  {}", theme.dim.apply_to(pagination)));
        }

        let hidden = if self.shows_hidden() { "Hide" } else { "Show" };
        lines.push(String::new());
        lines.push(format!(
            "  {}",
            theme
                .dim
                .apply_to("↑/↓: Navigate  Enter: Open folder  S: Select this directory")
        ));
        lines.push(format!(
            "  {}",
            theme
                .dim
                .apply_to(format!("H: {} hidden folders  Esc: Cancel", hidden))
        ));

        lines.join("\n")
    }
}
