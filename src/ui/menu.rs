//! Single-choice menu on top of [`SelectList`].

use console::Key;

use super::list::{Entry, Navigation, Outcome, SelectList};
use super::screen::Interaction;
use super::theme::Theme;

/// What a key press means to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Move the cursor.
    Navigate(Navigation),
    /// Choose the highlighted entry.
    Commit,
    /// Leave without choosing.
    Cancel,
}

/// Map a key press to a menu action.
pub fn menu_action(key: &Key) -> Option<MenuAction> {
    let action = match key {
        Key::ArrowUp | Key::Char('k') => MenuAction::Navigate(Navigation::Up),
        Key::ArrowDown | Key::Char('j') => MenuAction::Navigate(Navigation::Down),
        Key::PageUp => MenuAction::Navigate(Navigation::PageUp),
        Key::PageDown => MenuAction::Navigate(Navigation::PageDown),
        Key::Home | Key::Char('g') => MenuAction::Navigate(Navigation::Home),
        Key::End | Key::Char('G') => MenuAction::Navigate(Navigation::End),
        Key::Enter => MenuAction::Commit,
        Key::Escape | Key::CtrlC | Key::Char('q') => MenuAction::Cancel,
        _ => return None,
    };
    Some(action)
}

/// Lines a menu frame uses besides its rows, plus the line the cursor
/// rests on after the frame.
const MENU_CHROME_LINES: usize = 7;

/// A titled menu of `(label, description, value)` entries.
#[derive(Debug, Clone)]
pub struct Menu<V> {
    title: String,
    list: SelectList<V>,
    max_height: usize,
}

impl<V: Clone> Menu<V> {
    /// Create a menu showing `viewport_height` rows at a time.
    pub fn new(title: impl Into<String>, entries: Vec<Entry<V>>, viewport_height: usize) -> Self {
        Self {
            title: title.into(),
            list: SelectList::new(entries, viewport_height),
            max_height: viewport_height,
        }
    }

    /// The menu title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The underlying list.
    pub fn list(&self) -> &SelectList<V> {
        &self.list
    }

    /// Apply an action.
    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Navigate(nav) => self.list.navigate(nav),
            MenuAction::Commit => {
                self.list.commit();
            }
            MenuAction::Cancel => self.list.cancel(),
        }
    }
}

impl<V: Clone> Interaction for Menu<V> {
    type Value = V;

    fn handle_key(&mut self, key: &Key) {
        if let Some(action) = menu_action(key) {
            self.apply(action);
        }
    }

    fn outcome(&self) -> Option<Outcome<V>> {
        self.list.outcome()
    }

    fn fit_rows(&mut self, rows: usize) {
        let available = rows.saturating_sub(MENU_CHROME_LINES);
        self.list
            .set_viewport_height(self.max_height.min(available));
    }

    fn render(&self, theme: &Theme) -> String {
        let mut lines = vec![format!("{}", theme.title.apply_to(&self.title)), String::new()];

        if self.list.is_empty() {
            lines.push(format!("  {}", theme.dim.apply_to("(no items)")));
        }

        for row in self.list.rows() {
            if row.is_cursor {
                let mut line = format!(
                    "{}",
                    theme.selected.apply_to(format!("▸ {}", row.entry.label))
                );
                if let Some(desc) = &row.entry.description {
                    line.push_str(&format!("  {}", theme.dim.apply_to(desc)));
                }
                lines.push(line);
            } else {
                lines.push(format!(
                    "{}",
                    theme.text.apply_to(format!("  {}", row.entry.label))
                ));
            }
        }

        if let Some(pagination) = self.list.pagination() {
            lines.push(String::new());
            lines.push(format!("  {}", theme.dim.apply_to(pagination)));
        }

        lines.push(String::new());
        lines.push(format!(
            "  {}",
            theme
                .dim
                .apply_to("↑/↓: Navigate  Enter: Select  Esc: Back")
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::ScriptedScreen;
    use crate::ui::screen::run_interaction;

    fn main_menu(height: usize) -> Menu<String> {
        let entries = ["check", "install", "doctor", "version", "quit"]
            .iter()
            .map(|v| Entry::new(v.to_uppercase(), v.to_string()).with_description(format!("Do {}", v)))
            .collect();
        Menu::new("What would you like to do?", entries, height)
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            menu_action(&Key::ArrowDown),
            Some(MenuAction::Navigate(Navigation::Down))
        );
        assert_eq!(
            menu_action(&Key::Char('k')),
            Some(MenuAction::Navigate(Navigation::Up))
        );
        assert_eq!(
            menu_action(&Key::End),
            Some(MenuAction::Navigate(Navigation::End))
        );
        assert_eq!(menu_action(&Key::Enter), Some(MenuAction::Commit));
        assert_eq!(menu_action(&Key::CtrlC), Some(MenuAction::Cancel));
        assert_eq!(menu_action(&Key::Char('x')), None);
    }

    #[test]
    fn render_marks_cursor_row_with_description() {
        let mut menu = main_menu(10);
        menu.handle_key(&Key::ArrowDown);
        let frame = menu.render(&Theme::plain());
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], "What would you like to do?");
        assert_eq!(lines[2], "  CHECK");
        assert_eq!(lines[3], "▸ INSTALL  Do install");
        assert_eq!(lines.iter().filter(|l| l.starts_with('▸')).count(), 1);
        assert!(!frame.contains("showing"));
    }

    #[test]
    fn render_shows_pagination_when_overflowing() {
        let mut menu = main_menu(2);
        menu.handle_key(&Key::End);
        let frame = menu.render(&Theme::plain());
        assert!(frame.contains("(showing 4-5 of 5)"));
        assert!(frame.contains("▸ QUIT"));
        assert!(!frame.contains("CHECK"));
    }

    #[test]
    fn enter_commits_value_token() {
        let mut menu = main_menu(10);
        menu.handle_key(&Key::ArrowDown);
        menu.handle_key(&Key::ArrowDown);
        menu.handle_key(&Key::Enter);
        assert_eq!(menu.outcome(), Some(Outcome::Committed("doctor".to_string())));
    }

    #[test]
    fn escape_cancels() {
        let mut menu = main_menu(10);
        menu.handle_key(&Key::Escape);
        assert_eq!(menu.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn empty_menu_ignores_enter() {
        let mut menu: Menu<String> = Menu::new("Nothing", Vec::new(), 5);
        menu.handle_key(&Key::Enter);
        assert_eq!(menu.outcome(), None);
        assert!(menu.render(&Theme::plain()).contains("(no items)"));
    }

    #[test]
    fn ctrl_c_cancels_through_the_loop() {
        let mut menu = main_menu(10);
        let mut screen = ScriptedScreen::new(vec![Key::ArrowDown, Key::CtrlC, Key::Enter]);

        let outcome = run_interaction(&mut menu, &mut screen, &Theme::plain()).unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(screen.frames().len(), 2);
    }

    #[test]
    fn short_terminal_shrinks_the_viewport() {
        let entries = (0..20)
            .map(|i| Entry::new(format!("item {}", i), i.to_string()))
            .collect();
        let mut menu = Menu::new("Pick one", entries, 15);
        let mut screen = ScriptedScreen::new(vec![Key::End, Key::Enter]).with_rows(12);

        let outcome = run_interaction(&mut menu, &mut screen, &Theme::plain()).unwrap();

        assert_eq!(outcome, Outcome::Committed("19".to_string()));
        assert_eq!(menu.list().viewport_height(), 5);
        for frame in screen.frames() {
            assert!(frame.lines().count() < 12);
        }
        assert!(screen.frames()[1].contains("(showing 16-20 of 20)"));
    }

    #[test]
    fn tall_terminal_keeps_configured_height() {
        let mut menu = main_menu(3);
        menu.fit_rows(100);
        assert_eq!(menu.list().viewport_height(), 3);
        menu.fit_rows(8);
        assert_eq!(menu.list().viewport_height(), 1);
        menu.fit_rows(100);
        assert_eq!(menu.list().viewport_height(), 3);
    }
}
