//! List navigation core shared by menus and the directory picker.
//!
//! - [`scroll`] - cursor and viewport arithmetic
//! - [`select`] - selectable entries with commit/cancel states
//! - [`browser`] - directory-only filesystem browser
//!
//! Everything here is plain state; rendering and key handling live in
//! [`crate::ui::menu`] and [`crate::ui::picker`].

pub mod browser;
pub mod scroll;
pub mod select;

pub use browser::{
    is_hidden, resolve_start, BrowseTarget, DirectoryBrowser, DirectoryLister, FsLister,
    TargetKind, PARENT_LABEL,
};
pub use scroll::{Navigation, ScrollWindow};
pub use select::{Entry, ListState, Outcome, Pagination, Row, Rows, SelectList};
