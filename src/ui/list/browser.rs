//! Directory-only browser built on [`SelectList`].
//!
//! The browser lists the immediate subdirectories of the directory being
//! browsed, preceded by a synthetic `..` entry whenever that directory is
//! not a filesystem root. Entering a row navigates; only
//! [`DirectoryBrowser::select_current`] commits, and it commits the directory
//! being browsed rather than the highlighted row.
//!
//! Directory read failures are not errors here: the listing is simply empty
//! and the interaction continues.

use std::io;
use std::path::{Component, Path, PathBuf};

use super::scroll::Navigation;
use super::select::{Entry, ListState, Outcome, SelectList};

/// Label of the synthetic parent entry.
pub const PARENT_LABEL: &str = "..";

/// Filesystem capability used by the browser.
pub trait DirectoryLister {
    /// Names of the immediate subdirectories of `path`.
    ///
    /// Names starting with `.` are left out unless `include_hidden` is set.
    fn subdirectories(&self, path: &Path, include_hidden: bool) -> io::Result<Vec<String>>;
}

/// [`DirectoryLister`] backed by `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn subdirectories(&self, path: &Path, include_hidden: bool) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let Ok(entry) = entry else { continue };
            let name = entry.file_name().to_string_lossy().into_owned();
            if !include_hidden && is_hidden(&name) {
                continue;
            }
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                names.push(name);
            }
        }
        Ok(names)
    }
}

/// Whether a directory name is dot-prefixed.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// What a browser row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// The synthetic `..` row.
    Parent,
    /// A real subdirectory.
    Directory,
}

/// Navigation target of a browser row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseTarget {
    /// Absolute path the row leads to.
    pub path: PathBuf,
    /// Parent or subdirectory.
    pub kind: TargetKind,
}

/// Interactive directory picker state.
#[derive(Debug, Clone)]
pub struct DirectoryBrowser<L = FsLister> {
    current: PathBuf,
    show_hidden: bool,
    list: SelectList<BrowseTarget>,
    max_height: usize,
    state: ListState<PathBuf>,
    lister: L,
}

impl DirectoryBrowser<FsLister> {
    /// Browse the real filesystem starting at `start`.
    pub fn new(start: &Path, viewport_height: usize) -> Self {
        Self::with_lister(start, viewport_height, FsLister)
    }
}

impl<L: DirectoryLister> DirectoryBrowser<L> {
    /// Browse starting at `start` using a custom lister.
    pub fn with_lister(start: &Path, viewport_height: usize, lister: L) -> Self {
        let mut browser = Self {
            current: resolve_start(start),
            show_hidden: false,
            list: SelectList::new(Vec::new(), viewport_height),
            max_height: viewport_height,
            state: ListState::Active,
            lister,
        };
        browser.reload();
        browser
    }

    /// Set the initial hidden-entry flag.
    pub fn with_hidden(mut self, show_hidden: bool) -> Self {
        if self.show_hidden != show_hidden {
            self.show_hidden = show_hidden;
            self.reload();
        }
        self
    }

    /// Directory currently being browsed.
    pub fn current_path(&self) -> &Path {
        &self.current
    }

    /// Whether dot-prefixed directories are listed.
    pub fn shows_hidden(&self) -> bool {
        self.show_hidden
    }

    /// The underlying list (rows, cursor, pagination).
    pub fn list(&self) -> &SelectList<BrowseTarget> {
        &self.list
    }

    /// Show at most `height` rows, never more than the height the browser
    /// was created with.
    pub fn limit_viewport(&mut self, height: usize) {
        self.list.set_viewport_height(self.max_height.min(height));
    }

    /// Whether the current directory has no real subdirectories listed.
    pub fn is_listing_empty(&self) -> bool {
        self.list
            .entries()
            .iter()
            .all(|e| e.value.kind == TargetKind::Parent)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &ListState<PathBuf> {
        &self.state
    }

    /// Whether the browser reached a terminal state.
    pub fn is_done(&self) -> bool {
        !matches!(self.state, ListState::Active)
    }

    /// The final outcome once the browser is done.
    pub fn outcome(&self) -> Option<Outcome<PathBuf>> {
        match &self.state {
            ListState::Active => None,
            ListState::Committed(path) => Some(Outcome::Committed(path.clone())),
            ListState::Cancelled => Some(Outcome::Cancelled),
        }
    }

    /// Move the cursor.
    pub fn navigate(&mut self, nav: Navigation) {
        if !self.is_done() {
            self.list.navigate(nav);
        }
    }

    /// Navigate into the highlighted row.
    ///
    /// Returns `false` when there is nothing to enter.
    pub fn enter(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let Some(target) = self.list.highlighted().map(|e| e.value.path.clone()) else {
            return false;
        };
        self.current = target;
        self.reload();
        true
    }

    /// Commit the directory being browsed, whatever row is highlighted.
    pub fn select_current(&mut self) {
        if !self.is_done() {
            self.state = ListState::Committed(self.current.clone());
        }
    }

    /// Flip hidden-entry visibility and rebuild the listing.
    pub fn toggle_hidden(&mut self) {
        if self.is_done() {
            return;
        }
        self.show_hidden = !self.show_hidden;
        self.reload();
    }

    /// Finish without a selection.
    pub fn cancel(&mut self) {
        if !self.is_done() {
            self.state = ListState::Cancelled;
        }
    }

    /// Rebuild the entry sequence for the current directory.
    fn reload(&mut self) {
        let mut entries = Vec::new();

        if let Some(parent) = self.current.parent() {
            entries.push(Entry::new(
                PARENT_LABEL,
                BrowseTarget {
                    path: parent.to_path_buf(),
                    kind: TargetKind::Parent,
                },
            ));
        }

        match self
            .lister
            .subdirectories(&self.current, self.show_hidden)
        {
            Ok(mut names) => {
                names.sort();
                entries.extend(names.into_iter().map(|name| {
                    let path = self.current.join(&name);
                    Entry::new(
                        name,
                        BrowseTarget {
                            path,
                            kind: TargetKind::Directory,
                        },
                    )
                }));
            }
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", self.current.display(), e);
            }
        }

        tracing::debug!(
            "Loaded {} entries for {}",
            entries.len(),
            self.current.display()
        );
        self.list.replace_entries(entries);
    }
}

/// Turn a user-supplied start path into an absolute directory path.
///
/// An empty path starts at the home directory, falling back to the current
/// directory. `.` and `..` are resolved lexically; symlinks are kept as
/// given so the committed path matches what the caller asked for.
pub fn resolve_start(start: &Path) -> PathBuf {
    let start = if start.as_os_str().is_empty() {
        dirs::home_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        start.to_path_buf()
    };

    let absolute = std::path::absolute(&start).unwrap_or(start);
    normalize_lexically(&absolute)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // ".." at a root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
