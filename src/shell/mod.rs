//! External process invocation and PATH lookup.

pub mod command;
pub mod path;

pub use command::{run_captured, run_checked, CommandOutput};
pub use path::{is_executable, path_entries, resolve_tool_path};
