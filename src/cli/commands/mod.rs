//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. The interactive main menu in
//! [`menu`] reuses the same commands, so `takeoff check` and the
//! "Check Dependencies" menu entry print the same thing.

pub mod check;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod doctor;
pub mod install;
pub mod menu;
pub mod pick;
pub mod version;

pub use context::AppContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
