use crate::error::Result;
use crate::query::SortMethod;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Sort applied by `list` when none is given on the command line
    #[serde(default)]
    pub default_sort: SortMethod,

    /// Directory export files are written to (current directory when unset)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Ask before merging an import into a non-empty collection
    #[serde(default = "default_confirm_import")]
    pub confirm_import: bool,

    /// Suggested categories offered alongside the ones already in use
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: SortMethod::default(),
            export_dir: None,
            confirm_import: default_confirm_import(),
            categories: default_categories(),
        }
    }
}

fn default_confirm_import() -> bool {
    true
}

fn default_categories() -> Vec<String> {
    ["development", "design", "news", "utility", "other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/markshelf/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Failed to load config from {:?}: {}; using default configuration",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<()> {
        let config_path = crate::utils::get_config_dir().join("config.yml");
        self.save_to_path(&config_path)
    }

    /// Where exports go: the configured directory or the current one
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
