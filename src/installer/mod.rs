//! Flutter SDK installation.
//!
//! The actual transfer, extraction and PATH changes sit behind the
//! [`Installer`] trait. [`SimulatedInstaller`] only prepares the destination
//! directory; [`run_install`] drives any installer through the fixed
//! [`INSTALL_STEPS`] sequence and reports progress.

pub mod simulated;
pub mod steps;

use std::path::PathBuf;

use serde::Serialize;

pub use simulated::SimulatedInstaller;
pub use steps::{run_install, InstallStep, StepAction, INSTALL_STEPS, PLANNED_TASKS};

use crate::error::Result;
use std::path::Path;

/// Tool locations discovered during checks plus the chosen install path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallConfig {
    /// Existing Flutter SDK root, if one is on PATH.
    pub flutter_path: Option<PathBuf>,
    /// Android SDK root.
    pub android_sdk_path: Option<PathBuf>,
    /// Resolved `git` binary.
    pub git_path: Option<PathBuf>,
    /// `JAVA_HOME`.
    pub java_path: Option<PathBuf>,
}

/// Capability that places a Flutter SDK at a destination.
pub trait Installer {
    /// Fetch the SDK archive for `dest`.
    fn download(&mut self, dest: &Path) -> Result<()>;

    /// Unpack the SDK into `dest`.
    fn extract(&mut self, dest: &Path) -> Result<()>;

    /// Make `<dest>/bin` reachable from new shells.
    ///
    /// Returns the directory that is (or would be) added to PATH.
    fn configure_path(&mut self, dest: &Path) -> Result<PathBuf>;
}
