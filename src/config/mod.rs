//! Configuration loading for Takeoff.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use takeoff::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "picker_height: 20").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert_eq!(config.picker_height, 20);
//! assert_eq!(config.menu_height, 15);
//! ```
//!
//! # Configuration File Location
//!
//! `~/.takeoff/config.yml`, or any file passed with `--config`.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, user_config_path};
pub use schema::{expand_home, TakeoffConfig, DEFAULT_MENU_HEIGHT, DEFAULT_PICKER_HEIGHT};
