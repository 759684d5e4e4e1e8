//! Takeoff - Interactive installer and diagnostics for the Flutter SDK.
//!
//! Takeoff checks the prerequisites of a Flutter toolchain, walks the user
//! through a (simulated) SDK install and passes `flutter doctor` through.
//! Its terminal widgets, a windowed selectable list and the directory
//! browser built on it, are usable on their own.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Install capability and the fixed install sequence
//! - [`platform`] - Host OS and architecture detection
//! - [`requirements`] - Prerequisite detection
//! - [`shell`] - External process invocation
//! - [`ui`] - Lists, the directory browser, prompts and terminal output
//! - [`version`] - Build metadata
//!
//! # Example
//!
//! ```
//! use takeoff::ui::{Entry, Navigation, Outcome, SelectList};
//!
//! let entries = (0..12).map(|i| Entry::new(format!("item {i}"), i)).collect();
//! let mut list = SelectList::new(entries, 5);
//! for _ in 0..11 {
//!     list.navigate(Navigation::Down);
//! }
//! assert_eq!((list.cursor(), list.start()), (11, 7));
//!
//! list.commit();
//! assert_eq!(list.outcome(), Some(Outcome::Committed(11)));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod platform;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{Result, TakeoffError};
