//! Windowed scrolling over an ordered list.
//!
//! [`ScrollWindow`] tracks the highlighted row (the cursor) and the first
//! visible row of a fixed-height viewport. Every operation keeps the cursor
//! inside `[start, start + height)`; out-of-range moves clamp at the list
//! boundaries instead of failing.

use std::ops::Range;

/// A discrete navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One viewport up.
    PageUp,
    /// One viewport down.
    PageDown,
    /// First row.
    Home,
    /// Last row.
    End,
}

/// Cursor and viewport position for a list of `len` rows.
///
/// The entry count is passed to each operation rather than stored, so the
/// same window can follow a list whose contents are rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    cursor: usize,
    start: usize,
    height: usize,
}

impl ScrollWindow {
    /// Create a window with the given viewport height (0 is treated as 1).
    pub fn new(height: usize) -> Self {
        Self {
            cursor: 0,
            start: 0,
            height: height.max(1),
        }
    }

    /// Index of the highlighted row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of rows the viewport can show.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Apply a navigation request.
    pub fn navigate(&mut self, nav: Navigation, len: usize) {
        match nav {
            Navigation::Up => self.move_by(-1, len),
            Navigation::Down => self.move_by(1, len),
            Navigation::PageUp => self.page_up(len),
            Navigation::PageDown => self.page_down(len),
            Navigation::Home => self.home(),
            Navigation::End => self.end(len),
        }
    }

    /// Move the cursor by `delta` rows, clamped to `[0, len - 1]`, scrolling
    /// the viewport just enough to keep the cursor visible.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }

        let last = len - 1;
        let target = if delta.is_negative() {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta.unsigned_abs())
        };
        self.cursor = target.min(last);

        if self.cursor < self.start {
            self.start = self.cursor;
        } else if self.cursor >= self.start.saturating_add(self.height) {
            self.start = self.cursor + 1 - self.height;
        }
    }

    /// Jump to the first row.
    pub fn home(&mut self) {
        self.reset();
    }

    /// Jump to the last row, showing a full final page when possible.
    pub fn end(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.cursor = len - 1;
        self.start = len.saturating_sub(self.height);
    }

    /// Move up by one viewport.
    pub fn page_up(&mut self, len: usize) {
        self.move_by(-self.page(), len);
    }

    /// Move down by one viewport.
    pub fn page_down(&mut self, len: usize) {
        self.move_by(self.page(), len);
    }

    fn page(&self) -> isize {
        isize::try_from(self.height).unwrap_or(isize::MAX)
    }

    /// Change the viewport height (0 is treated as 1), keeping the cursor
    /// visible.
    pub fn set_height(&mut self, height: usize, len: usize) {
        self.height = height.max(1);
        self.clamp(len);
    }

    /// Put cursor and viewport back on the first row.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.start = 0;
    }

    /// Restore the window invariant after the row count changed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        self.start = self.start.min(len.saturating_sub(self.height));
        if self.cursor < self.start {
            self.start = self.cursor;
        } else if self.cursor >= self.start.saturating_add(self.height) {
            self.start = self.cursor + 1 - self.height;
        }
    }

    /// Indices of the rows currently inside the viewport.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        start..start.saturating_add(self.height).min(len)
    }
}
