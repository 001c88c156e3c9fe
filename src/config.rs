//! Configuration file support
//!
//! Loads settings from ~/.weblight.toml (or %USERPROFILE%\.weblight.toml on Windows)
//!
//! Example:
//! ```toml
//! # weblight configuration
//! theme = "dark"
//! highlighting = true
//! line-numbers = true
//! tab-width = 4
//!
//! [extensions]
//! vue = "html"
//! mjs = "javascript"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::syntax::{identifier_for_path, Theme};

const FILE_NAME: &str = ".weblight.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Color theme
    pub theme: Theme,
    /// Whether syntax highlighting is enabled
    pub highlighting: bool,
    /// Whether to show line numbers
    pub line_numbers: bool,
    /// Tab width for display
    pub tab_width: usize,
    /// Extra extension to language identifier mappings
    pub extensions: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            highlighting: true,
            line_numbers: true,
            tab_width: 4,
            extensions: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        let home = std::env::var_os("USERPROFILE");
        #[cfg(not(windows))]
        let home = std::env::var_os("HOME");

        home.map(|home| PathBuf::from(home).join(FILE_NAME))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is
    /// reported and also yields defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {}: {}", path.display(), err);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.tab_width = config.tab_width.clamp(1, 16);
        config.extensions = config
            .extensions
            .into_iter()
            .map(|(ext, language)| (ext.trim_start_matches('.').to_ascii_lowercase(), language))
            .collect();
        Ok(config)
    }

    /// Serialize configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Save current configuration to the default location
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Err(Error::Message("no home directory to save settings in".into())),
        }
    }

    /// Save current configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Language identifier for a file, honoring extension overrides
    pub fn language_for_path(&self, path: &Path) -> String {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.and_then(|ext| self.extensions.get(&ext)) {
            Some(language) => language.clone(),
            None => identifier_for_path(path).to_string(),
        }
    }
}
