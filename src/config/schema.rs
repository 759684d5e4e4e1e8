//! Configuration schema.
//!
//! Every field is optional in YAML; missing fields take their defaults.
//!
//! ```yaml
//! menu_height: 15
//! picker_height: 12
//! install_path: ~/sdk/flutter
//! show_hidden: false
//! theme:
//!   primary_color: magenta
//!   secondary_color: 36
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::platform::default_flutter_path;
use crate::ui::ThemeOptions;

/// Default number of rows shown by menus.
pub const DEFAULT_MENU_HEIGHT: usize = 15;

/// Default number of rows shown by the directory picker.
pub const DEFAULT_PICKER_HEIGHT: usize = 12;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TakeoffConfig {
    /// Rows visible in menus.
    pub menu_height: usize,

    /// Rows visible in the directory picker.
    pub picker_height: usize,

    /// Default Flutter SDK destination. `~` expands to the home directory.
    pub install_path: Option<PathBuf>,

    /// Whether the picker starts with hidden directories shown.
    pub show_hidden: bool,

    /// Colours.
    pub theme: ThemeOptions,
}

impl Default for TakeoffConfig {
    fn default() -> Self {
        Self {
            menu_height: DEFAULT_MENU_HEIGHT,
            picker_height: DEFAULT_PICKER_HEIGHT,
            install_path: None,
            show_hidden: false,
            theme: ThemeOptions::default(),
        }
    }
}

impl TakeoffConfig {
    /// Install path with `~` expanded, falling back to `<home>/flutter`.
    pub fn install_path(&self) -> PathBuf {
        match &self.install_path {
            Some(path) => expand_home(path),
            None => default_flutter_path(),
        }
    }
}

/// Replace a leading `~` with the home directory.
pub fn expand_home(path: &std::path::Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
