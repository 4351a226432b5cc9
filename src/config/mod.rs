//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Defaults matching the conventional `assets/` layout

pub mod loader;

pub use loader::{Config, OptionsConfig, PathsConfig};
