//! Prerequisite detection for the Flutter toolchain.

pub mod checker;
pub mod probe;
pub mod status;

pub use checker::{DependencyChecker, FLUTTER_SDK};
pub use probe::{default_context, ProbeContext};
pub use status::{extract_version, Dependency, DependencyReport};
