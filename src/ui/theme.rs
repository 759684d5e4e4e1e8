//! Visual theme and styling.
//!
//! The theme is built from four named colour options and passed explicitly
//! into every render call; there is no process-wide style state.

use console::{Color, Style};
use serde::{Deserialize, Serialize};

/// A colour given either by ANSI name or by 256-colour index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// 256-colour palette index.
    Index(u8),
    /// One of the eight basic ANSI colour names.
    Name(String),
}

impl ColorSpec {
    /// Resolve to a terminal colour. Unknown names fall back to white.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Index(i) => Color::Color256(*i),
            ColorSpec::Name(name) => match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" | "purple" => Color::Magenta,
                "cyan" => Color::Cyan,
                other => {
                    if other != "white" {
                        tracing::warn!("Unknown colour '{}', using white", name);
                    }
                    Color::White
                }
            },
        }
    }
}

/// Named colour options for the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Titles, headers and the highlighted row.
    pub primary_color: ColorSpec,
    /// Success messages and progress bars.
    pub secondary_color: ColorSpec,
    /// Error messages.
    pub error_color: ColorSpec,
    /// Regular text.
    pub text_color: ColorSpec,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            primary_color: ColorSpec::Index(135),
            secondary_color: ColorSpec::Index(36),
            error_color: ColorSpec::Index(203),
            text_color: ColorSpec::Index(254),
        }
    }
}

/// Takeoff's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for titles and headers (primary bold).
    pub title: Style,
    /// Style for the highlighted list row (primary bold).
    pub selected: Style,
    /// Style for success messages (secondary bold).
    pub success: Style,
    /// Style for progress bars (secondary).
    pub bar: Style,
    /// Style for warning messages (amber bold).
    pub warning: Style,
    /// Style for error messages (error bold).
    pub error: Style,
    /// Style for regular text.
    pub text: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for header underlines (primary).
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::from_options(&ThemeOptions::default())
    }

    /// Build a theme from named colour options.
    pub fn from_options(options: &ThemeOptions) -> Self {
        let primary = options.primary_color.to_color();
        let secondary = options.secondary_color.to_color();
        Self {
            title: Style::new().fg(primary).bold(),
            selected: Style::new().fg(primary).bold(),
            success: Style::new().fg(secondary).bold(),
            bar: Style::new().fg(secondary),
            warning: Style::new().color256(214).bold(),
            error: Style::new().fg(options.error_color.to_color()).bold(),
            text: Style::new().fg(options.text_color.to_color()),
            dim: Style::new().dim(),
            border: Style::new().fg(primary),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            selected: Style::new(),
            success: Style::new(),
            bar: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            text: Style::new(),
            dim: Style::new(),
            border: Style::new(),
        }
    }

    /// Pick the coloured or plain theme depending on the output target.
    pub fn for_terminal(options: &ThemeOptions) -> Self {
        if should_use_colors() {
            Self::from_options(options)
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header with an underline.
    pub fn format_header(&self, title: &str) -> String {
        let width = console::measure_text_width(title) + 2;
        format!(
            "{}\n{}",
            self.title.apply_to(format!(" {} ", title)),
            self.border.apply_to("─".repeat(width))
        )
    }

    /// Format a `(y/n)` confirmation question.
    pub fn format_confirm(&self, question: &str) -> String {
        format!(
            "{} {} {}",
            self.warning.apply_to("?"),
            question,
            self.dim.apply_to("(y/n)")
        )
    }

    /// Format a checklist line.
    pub fn format_checkbox(&self, checked: bool, label: &str) -> String {
        if checked {
            format!("{}", self.success.apply_to(format!("☑ {}", label)))
        } else {
            format!("{}", self.text.apply_to(format!("☐ {}", label)))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
