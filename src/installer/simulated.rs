//! Installer that prepares the destination and nothing else.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TakeoffError};

use super::Installer;

/// Creates the destination directory; no download, extraction or PATH edit.
#[derive(Debug, Default)]
pub struct SimulatedInstaller {
    path_entry: Option<PathBuf>,
}

impl SimulatedInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// PATH entry reported by the last `configure_path` call.
    pub fn path_entry(&self) -> Option<&Path> {
        self.path_entry.as_deref()
    }
}

impl Installer for SimulatedInstaller {
    fn download(&mut self, dest: &Path) -> Result<()> {
        if !dest.exists() {
            fs::create_dir_all(dest).map_err(|e| TakeoffError::InstallFailed {
                step: "download".to_string(),
                message: format!("failed to create {}: {}", dest.display(), e),
            })?;
            tracing::debug!("created {}", dest.display());
        }
        Ok(())
    }

    fn extract(&mut self, dest: &Path) -> Result<()> {
        tracing::debug!("simulated extraction into {}", dest.display());
        Ok(())
    }

    fn configure_path(&mut self, dest: &Path) -> Result<PathBuf> {
        let bin = dest.join("bin");
        tracing::debug!("would add {} to PATH", bin.display());
        self.path_entry = Some(bin.clone());
        Ok(bin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn download_creates_missing_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("sdk").join("flutter");
        let mut installer = SimulatedInstaller::new();

        installer.download(&dest).unwrap();
        assert!(dest.is_dir());
        // Second call is a no-op on an existing directory
        installer.download(&dest).unwrap();
    }

    #[test]
    fn download_fails_when_destination_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let mut installer = SimulatedInstaller::new();

        let err = installer.download(&blocker.join("flutter")).unwrap_err();
        assert!(matches!(err, TakeoffError::InstallFailed { ref step, .. } if step == "download"));
    }

    #[test]
    fn configure_path_reports_bin_directory() {
        let mut installer = SimulatedInstaller::new();
        let bin = installer.configure_path(Path::new("/opt/flutter")).unwrap();
        assert_eq!(bin, Path::new("/opt/flutter/bin"));
        assert_eq!(installer.path_entry(), Some(Path::new("/opt/flutter/bin")));
    }
}
