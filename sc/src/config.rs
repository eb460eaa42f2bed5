//! Scaffold configuration types and loading

use eyre::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::project::{DEFAULT_TEMPLATES_DIR, Layout};

/// Project-local config file name
pub const LOCAL_CONFIG: &str = ".scaffold.yml";

/// Main scaffold configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root that holds the templates directory and receives new projects
    pub root: PathBuf,

    /// Templates directory, relative to the root unless absolute
    pub templates: PathBuf,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            templates: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// An explicit path must load. Otherwise `.scaffold.yml` in the working
    /// directory, then `<config dir>/scaffold/scaffold.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for path in Self::fallback_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {:#}", path.display(), e),
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, without logging, so the logger can be set up
    /// before the full load runs
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates: Vec<PathBuf> = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::fallback_paths().collect(),
        };

        candidates
            .into_iter()
            .filter_map(|path| fs::read_to_string(path).ok())
            .find_map(|content| serde_yaml::from_str::<Self>(&content).ok())
            .and_then(|config| config.log_level)
    }

    fn fallback_paths() -> impl Iterator<Item = PathBuf> {
        let local_config = PathBuf::from(LOCAL_CONFIG);
        let user_config = dirs::config_dir().map(|dir| dir.join("scaffold").join("scaffold.yml"));
        std::iter::once(local_config).chain(user_config)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Layout for this config, with `root_override` taking precedence over `root`
    pub fn layout(&self, root_override: Option<&Path>) -> Layout {
        let root = root_override.unwrap_or(&self.root);
        Layout::with_templates(root, &self.templates)
    }
}
