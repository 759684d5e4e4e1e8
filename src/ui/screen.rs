//! Synchronous render/read-key/update loop for list interactions.
//!
//! An [`Interaction`] is a piece of UI state that reacts to keys and renders
//! itself to text. [`run_interaction`] drives one to completion on a
//! [`Screen`] and hands back an explicit [`Outcome`].

use std::io::{self, Write};

use console::{Key, Term};

use crate::error::{Result, TakeoffError};

use super::list::Outcome;
use super::theme::Theme;

/// Something that can be driven by key presses until it reaches an outcome.
pub trait Interaction {
    /// Value produced when the interaction is committed.
    type Value;

    /// Apply one key press.
    fn handle_key(&mut self, key: &Key);

    /// The final outcome, once the interaction is done.
    fn outcome(&self) -> Option<Outcome<Self::Value>>;

    /// Render the current frame.
    fn render(&self, theme: &Theme) -> String;

    /// Shrink the viewport so a frame fits in `rows` terminal lines.
    fn fit_rows(&mut self, _rows: usize) {}
}

/// Key input and frame output for an interaction.
pub trait Screen {
    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Replace the previously drawn frame with `frame`.
    fn draw(&mut self, frame: &str) -> io::Result<()>;

    /// Erase the last drawn frame.
    fn clear(&mut self) -> io::Result<()>;

    /// Terminal height in lines, when known.
    fn rows(&self) -> Option<usize> {
        None
    }
}

/// Drive `interaction` until it commits or is cancelled.
pub fn run_interaction<I: Interaction>(
    interaction: &mut I,
    screen: &mut dyn Screen,
    theme: &Theme,
) -> Result<Outcome<I::Value>> {
    loop {
        if let Some(outcome) = interaction.outcome() {
            screen.clear()?;
            return Ok(outcome);
        }
        if let Some(rows) = screen.rows() {
            interaction.fit_rows(rows);
        }
        screen.draw(&interaction.render(theme))?;
        let key = screen.read_key()?;
        tracing::trace!("key: {:?}", key);
        interaction.handle_key(&key);
    }
}

/// [`Screen`] on the real terminal, redrawing frames in place.
pub struct TermScreen {
    term: Term,
    drawn_lines: usize,
}

impl TermScreen {
    /// Open the terminal on stdout.
    ///
    /// Fails when stdout is not an interactive terminal.
    pub fn open() -> Result<Self> {
        let term = Term::stdout();
        if !term.is_term() {
            return Err(TakeoffError::TerminalUnavailable {
                message: "stdout is not a terminal".to_string(),
            });
        }
        term.hide_cursor()?;
        Ok(Self {
            term,
            drawn_lines: 0,
        })
    }
}

impl Screen for TermScreen {
    fn read_key(&mut self) -> io::Result<Key> {
        // `read_key` raises SIGINT on ^C; the raw variant hands it back
        self.term.read_key_raw()
    }

    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.clear()?;
        let width = self.term.size().1 as usize;
        let mut count = 0;
        for line in frame.lines() {
            // Wrapped lines would break the in-place redraw.
            let line = console::truncate_str(line, width.max(1), "…");
            writeln!(self.term, "{}", line)?;
            count += 1;
        }
        self.drawn_lines = count;
        self.term.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.drawn_lines > 0 {
            self.term.clear_last_lines(self.drawn_lines)?;
            self.drawn_lines = 0;
        }
        Ok(())
    }

    fn rows(&self) -> Option<usize> {
        Some(self.term.size().0 as usize)
    }
}

impl Drop for TermScreen {
    fn drop(&mut self) {
        self.term.show_cursor().ok();
    }
}
