//! Selectable list with commit/cancel semantics.

use std::fmt;

use super::scroll::{Navigation, ScrollWindow};

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// Text shown for the row.
    pub label: String,
    /// Optional secondary text.
    pub description: Option<String>,
    /// Token returned when the row is committed.
    pub value: V,
}

impl<V> Entry<V> {
    /// Create an entry without a description.
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            description: None,
            value,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Lifecycle of a list interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState<V> {
    /// Still accepting input.
    Active,
    /// A value was chosen. Terminal.
    Committed(V),
    /// The user backed out. Terminal.
    Cancelled,
}

/// Final result handed back to the caller of an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V> {
    /// The user chose a value.
    Committed(V),
    /// The user cancelled without choosing.
    Cancelled,
}

impl<V> Outcome<V> {
    /// The committed value, if any.
    pub fn committed(self) -> Option<V> {
        match self {
            Outcome::Committed(v) => Some(v),
            Outcome::Cancelled => None,
        }
    }

    /// Whether the interaction was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// A visible row produced by [`SelectList::rows`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a, V> {
    /// Position of the entry in the full list.
    pub index: usize,
    /// The entry itself.
    pub entry: &'a Entry<V>,
    /// Whether the cursor rests on this row.
    pub is_cursor: bool,
}

/// Lazy iterator over the visible window of a list.
///
/// Finite and cheap to clone; call [`SelectList::rows`] again to restart
/// from the top of the viewport.
#[derive(Debug)]
pub struct Rows<'a, V> {
    entries: &'a [Entry<V>],
    next: usize,
    end: usize,
    cursor: usize,
}

impl<V> Clone for Rows<'_, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries,
            next: self.next,
            end: self.end,
            cursor: self.cursor,
        }
    }
}

impl<'a, V> Iterator for Rows<'a, V> {
    type Item = Row<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Row {
            index,
            entry: &self.entries[index],
            is_cursor: index == self.cursor,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for Rows<'_, V> {}

/// Visible range hint for lists longer than their viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based index of the first visible row.
    pub first: usize,
    /// 1-based index of the last visible row.
    pub last: usize,
    /// Total number of rows.
    pub total: usize,
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(showing {}-{} of {})", self.first, self.last, self.total)
    }
}

/// An ordered list of entries with a cursor and a scrolling viewport.
#[derive(Debug, Clone)]
pub struct SelectList<V> {
    entries: Vec<Entry<V>>,
    window: ScrollWindow,
    state: ListState<V>,
}

impl<V: Clone> SelectList<V> {
    /// Create an active list showing `viewport_height` rows at a time.
    pub fn new(entries: Vec<Entry<V>>, viewport_height: usize) -> Self {
        Self {
            entries,
            window: ScrollWindow::new(viewport_height),
            state: ListState::Active,
        }
    }

    /// All entries in order.
    pub fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the highlighted entry.
    pub fn cursor(&self) -> usize {
        self.window.cursor()
    }

    /// Index of the first visible entry.
    pub fn start(&self) -> usize {
        self.window.start()
    }

    /// Viewport height in rows.
    pub fn viewport_height(&self) -> usize {
        self.window.height()
    }

    /// The highlighted entry, if the list is non-empty.
    pub fn highlighted(&self) -> Option<&Entry<V>> {
        self.entries.get(self.window.cursor())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &ListState<V> {
        &self.state
    }

    /// Whether the list reached a terminal state.
    pub fn is_done(&self) -> bool {
        !matches!(self.state, ListState::Active)
    }

    /// The final outcome once the list is done.
    pub fn outcome(&self) -> Option<Outcome<V>> {
        match &self.state {
            ListState::Active => None,
            ListState::Committed(v) => Some(Outcome::Committed(v.clone())),
            ListState::Cancelled => Some(Outcome::Cancelled),
        }
    }

    /// Move the cursor. Ignored once the list is done.
    pub fn navigate(&mut self, nav: Navigation) {
        if self.is_done() {
            return;
        }
        self.window.navigate(nav, self.entries.len());
    }

    /// Commit the highlighted entry.
    ///
    /// Returns `false` (and stays active) when the list is empty or already done.
    pub fn commit(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        match self.entries.get(self.window.cursor()) {
            Some(entry) => {
                self.state = ListState::Committed(entry.value.clone());
                true
            }
            None => false,
        }
    }

    /// Finish without a selection. Ignored once the list is done.
    pub fn cancel(&mut self) {
        if !self.is_done() {
            self.state = ListState::Cancelled;
        }
    }

    /// Change the number of visible rows, keeping the cursor in view.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.window.set_height(height, self.entries.len());
    }

    /// Replace all entries and move the cursor back to the top.
    pub fn replace_entries(&mut self, entries: Vec<Entry<V>>) {
        self.entries = entries;
        self.window.reset();
    }

    /// Rows inside the current viewport.
    pub fn rows(&self) -> Rows<'_, V> {
        let range = self.window.visible_range(self.entries.len());
        Rows {
            entries: &self.entries,
            next: range.start,
            end: range.end,
            cursor: self.window.cursor(),
        }
    }

    /// Visible range hint, present only when the list overflows the viewport.
    pub fn pagination(&self) -> Option<Pagination> {
        let total = self.entries.len();
        if total <= self.window.height() {
            return None;
        }
        let range = self.window.visible_range(total);
        Some(Pagination {
            first: range.start + 1,
            last: range.end,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize, height: usize) -> SelectList<String> {
        let entries = (0..n)
            .map(|i| Entry::new(format!("Item {}", i), format!("v{}", i)))
            .collect();
        SelectList::new(entries, height)
    }

    #[test]
    fn commit_records_highlighted_value() {
        let mut list = numbered(4, 10);
        list.navigate(Navigation::Down);
        list.navigate(Navigation::Down);
        assert!(list.commit());
        assert_eq!(list.state(), &ListState::Committed("v2".to_string()));
        assert_eq!(list.outcome(), Some(Outcome::Committed("v2".to_string())));
    }

    #[test]
    fn commit_on_empty_list_is_a_no_op() {
        let mut list: SelectList<String> = SelectList::new(Vec::new(), 5);
        assert!(!list.commit());
        assert!(!list.is_done());
        assert_eq!(list.outcome(), None);
    }

    #[test]
    fn cancel_is_distinct_from_committing_an_empty_value() {
        let mut empty_value = SelectList::new(vec![Entry::new("Blank", String::new())], 5);
        empty_value.commit();
        let mut cancelled = empty_value.clone();
        cancelled.state = ListState::Active;
        cancelled.cancel();

        assert_eq!(empty_value.outcome(), Some(Outcome::Committed(String::new())));
        assert_eq!(cancelled.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn terminal_states_ignore_further_input() {
        let mut list = numbered(3, 5);
        list.cancel();
        list.navigate(Navigation::Down);
        assert!(!list.commit());
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.state(), &ListState::Cancelled);

        let mut list = numbered(3, 5);
        list.commit();
        list.cancel();
        assert_eq!(list.state(), &ListState::Committed("v0".to_string()));
    }

    #[test]
    fn rows_cover_only_the_viewport() {
        let mut list = numbered(12, 5);
        for _ in 0..11 {
            list.navigate(Navigation::Down);
        }
        let indices: Vec<usize> = list.rows().map(|r| r.index).collect();
        assert_eq!(indices, vec![7, 8, 9, 10, 11]);
        let cursor_rows: Vec<usize> = list
            .rows()
            .filter(|r| r.is_cursor)
            .map(|r| r.index)
            .collect();
        assert_eq!(cursor_rows, vec![11]);
    }

    #[test]
    fn rows_can_be_restarted() {
        let list = numbered(3, 5);
        let rows = list.rows();
        let first: Vec<&str> = rows.clone().map(|r| r.entry.label.as_str()).collect();
        let second: Vec<&str> = rows.map(|r| r.entry.label.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(list.rows().len(), 3);
    }

    #[test]
    fn pagination_only_when_overflowing() {
        let short = numbered(5, 5);
        assert!(short.pagination().is_none());

        let mut long = numbered(12, 5);
        assert_eq!(
            long.pagination(),
            Some(Pagination {
                first: 1,
                last: 5,
                total: 12
            })
        );
        long.navigate(Navigation::End);
        assert_eq!(
            long.pagination().map(|p| p.to_string()).as_deref(),
            Some("(showing 8-12 of 12)")
        );
    }

    #[test]
    fn replace_entries_resets_cursor() {
        let mut list = numbered(10, 3);
        list.navigate(Navigation::End);
        list.replace_entries(vec![Entry::new("only", "x".to_string())]);
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.start(), 0);
        assert_eq!(list.highlighted().map(|e| e.label.as_str()), Some("only"));
    }

    #[test]
    fn entry_description_is_optional() {
        let plain = Entry::new("Exit", "quit");
        let described = Entry::new("Exit", "quit").with_description("Quit the installer");
        assert!(plain.description.is_none());
        assert_eq!(described.description.as_deref(), Some("Quit the installer"));
    }

    #[test]
    fn outcome_helpers() {
        assert_eq!(Outcome::Committed(3).committed(), Some(3));
        assert!(Outcome::<u8>::Cancelled.is_cancelled());
        assert_eq!(Outcome::<u8>::Cancelled.committed(), None);
    }
}
