//! The fixed installation sequence.

use std::path::{Path, PathBuf};

use crate::error::{Result, TakeoffError};
use crate::ui::ProgressHandle;

use super::Installer;

/// Installer call made by a step, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    None,
    Download,
    Extract,
    ConfigurePath,
}

/// One line of the installation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallStep {
    pub label: &'static str,
    /// Progress reached when the step starts.
    pub percent: u8,
    pub action: StepAction,
}

/// Steps in execution order.
pub const INSTALL_STEPS: [InstallStep; 6] = [
    InstallStep {
        label: "Preparing installation...",
        percent: 10,
        action: StepAction::None,
    },
    InstallStep {
        label: "Downloading Flutter SDK (this may take a few minutes)...",
        percent: 30,
        action: StepAction::Download,
    },
    InstallStep {
        label: "Extracting files...",
        percent: 60,
        action: StepAction::Extract,
    },
    InstallStep {
        label: "Setting up environment...",
        percent: 80,
        action: StepAction::None,
    },
    InstallStep {
        label: "Configuring PATH...",
        percent: 90,
        action: StepAction::ConfigurePath,
    },
    InstallStep {
        label: "Finalizing installation...",
        percent: 100,
        action: StepAction::None,
    },
];

/// Checklist shown before the user confirms.
pub const PLANNED_TASKS: [&str; 5] = [
    "Download Flutter SDK",
    "Extract to installation path",
    "Add Flutter to PATH",
    "Accept Android licenses",
    "Run flutter doctor",
];

/// Run every step of [`INSTALL_STEPS`] against `installer`.
///
/// Returns the PATH entry reported by the installer. The first failing step
/// abandons the progress display and yields [`TakeoffError::InstallFailed`].
pub fn run_install(
    installer: &mut dyn Installer,
    dest: &Path,
    progress: &mut dyn ProgressHandle,
) -> Result<PathBuf> {
    let mut path_entry = dest.join("bin");

    for step in &INSTALL_STEPS {
        progress.set(step.percent, step.label);
        tracing::debug!("install step: {}", step.label);

        let result = match step.action {
            StepAction::None => Ok(()),
            StepAction::Download => installer.download(dest),
            StepAction::Extract => installer.extract(dest),
            StepAction::ConfigurePath => installer.configure_path(dest).map(|bin| {
                path_entry = bin;
            }),
        };

        if let Err(e) = result {
            let err = match e {
                TakeoffError::InstallFailed { .. } => e,
                other => TakeoffError::InstallFailed {
                    step: step.label.to_string(),
                    message: other.to_string(),
                },
            };
            progress.abandon(&err.to_string());
            return Err(err);
        }
    }

    progress.finish("Flutter SDK installation complete!");
    Ok(path_entry)
}
