//! Install progress display.

use indicatif::{ProgressBar, ProgressStyle};

use super::theme::Theme;
use super::ProgressHandle;

/// Narrowest bar drawn; anything below falls back to [`DEFAULT_BAR_WIDTH`].
pub const MIN_BAR_WIDTH: usize = 10;

/// Bar width used when the requested width is too small.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Render a static progress bar such as `████░░░░░░  40%`.
///
/// `percent` is clamped to 100.
pub fn format_progress_bar(percent: u8, width: usize, theme: &Theme) -> String {
    let width = if width < MIN_BAR_WIDTH {
        DEFAULT_BAR_WIDTH
    } else {
        width
    };
    let percent = percent.min(100);
    let filled = width * percent as usize / 100;
    let empty = width - filled;

    format!(
        "{}{} {:>3}%",
        theme.bar.apply_to("█".repeat(filled)),
        theme.dim.apply_to("░".repeat(empty)),
        percent
    )
}

/// Percentage progress backed by an indicatif bar.
pub struct InstallProgress {
    bar: ProgressBar,
    theme: Theme,
}

impl InstallProgress {
    /// Create a visible progress bar.
    pub fn new(theme: Theme) -> Self {
        let bar = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg}\n{bar:40.cyan/dim} {pos:>3}%")
            .map(|s| s.progress_chars("█░"))
        {
            bar.set_style(style);
        }
        Self { bar, theme }
    }

    /// Create a bar that draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: Theme::plain(),
        }
    }
}

impl ProgressHandle for InstallProgress {
    fn set(&mut self, percent: u8, status: &str) {
        self.bar.set_position(u64::from(percent.min(100)));
        self.bar.set_message(status.to_string());
    }

    fn finish(&mut self, msg: &str) {
        self.bar.set_position(100);
        self.bar
            .finish_with_message(self.theme.format_success(msg));
    }

    fn abandon(&mut self, msg: &str) {
        self.bar.abandon_with_message(self.theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        let bar = format_progress_bar(30, 10, &Theme::plain());
        assert_eq!(bar, "███░░░░░░░  30%");
    }

    #[test]
    fn bar_narrower_than_minimum_uses_default_width() {
        let bar = format_progress_bar(50, 3, &Theme::plain());
        assert_eq!(bar.matches('█').count(), 20);
        assert_eq!(bar.matches('░').count(), 20);
        assert!(bar.ends_with("  50%"));
    }

    #[test]
    fn bar_clamps_percent() {
        let bar = format_progress_bar(250, 10, &Theme::plain());
        assert_eq!(bar, "██████████ 100%");
    }

    #[test]
    fn empty_bar() {
        let bar = format_progress_bar(0, 12, &Theme::plain());
        assert_eq!(bar, "░░░░░░░░░░░░   0%");
    }

    #[test]
    fn install_progress_tracks_position() {
        let mut progress = InstallProgress::hidden();
        progress.set(60, "Extracting files...");
        assert_eq!(progress.bar.position(), 60);
        assert_eq!(progress.bar.message(), "Extracting files...");
        progress.finish("Flutter SDK installed successfully!");
        assert_eq!(progress.bar.position(), 100);
        assert!(progress.bar.is_finished());
    }
}
