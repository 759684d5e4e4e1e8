//! Configuration file discovery and loading.

use crate::config::schema::TakeoffConfig;
use crate::error::{Result, TakeoffError};
use std::fs;
use std::path::{Path, PathBuf};

/// User's config file: `~/.takeoff/config.yml`.
pub fn user_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".takeoff").join("config.yml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `~/.takeoff/config.yml` is used
/// when present and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<TakeoffConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => {
            tracing::debug!("no config file, using defaults");
            Ok(TakeoffConfig::default())
        }
    }
}

/// Load a single config file and parse it into TakeoffConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<TakeoffConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TakeoffError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TakeoffError::Io(e)
        }
    })?;

    tracing::debug!("loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into TakeoffConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<TakeoffConfig> {
    if content.trim().is_empty() {
        return Ok(TakeoffConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| TakeoffError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, TakeoffError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_file_is_parsed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "menu_height: 8\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.menu_height, 8);
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_config("menu_height: [oops", Path::new("/cfg.yml")).unwrap_err();
        match err {
            TakeoffError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("/cfg.yml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = parse_config("show_hidden: maybe-later", Path::new("/cfg.yml"));
        assert!(err.is_err());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("\n", Path::new("/cfg.yml")).unwrap();
        assert_eq!(config, TakeoffConfig::default());
    }

    #[test]
    fn user_config_lives_under_dot_takeoff() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with(".takeoff/config.yml"));
        }
    }
}
