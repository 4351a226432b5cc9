//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure.
///
/// Everything has a default, so running without a config file works out of
/// the box against the conventional `assets/` layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the papers tree (`<year>/<examType>/<category>/*.pdf`).
    #[serde(default = "default_papers_dir")]
    pub papers_dir: PathBuf,

    /// Directory the JSON index files are written into.
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            papers_dir: default_papers_dir(),
            config_dir: default_config_dir(),
        }
    }
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Whether to print each individual rename.
    #[serde(default = "default_true")]
    pub show_renames: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self { show_renames: true }
    }
}

fn default_papers_dir() -> PathBuf {
    PathBuf::from("assets/papers")
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("assets/config")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.paths.papers_dir, PathBuf::from("assets/papers"));
        assert_eq!(config.paths.config_dir, PathBuf::from("assets/config"));
        assert!(config.options.show_renames);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[paths]\npapers_dir = \"/data/papers\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.paths.papers_dir, PathBuf::from("/data/papers"));
        // Unset fields keep their defaults.
        assert_eq!(config.paths.config_dir, PathBuf::from("assets/config"));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "paths = not toml").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
