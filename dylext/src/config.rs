//! Configuration module for the dylext CLI.
//!
//! This module handles loading, saving, and validating the `dylext.toml`
//! settings file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use dylex_lex::{AnalyzerConfig, Category};
use dylex_util::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{DylextError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "dylext.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Indentation step handed to the analyzer.
    #[serde(default = "default_indent_unit")]
    pub indent_unit: u32,

    /// Tab width used when measuring indentation.
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Highlight-specific configuration.
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// SGR code per category name, used by the `ansi` format.
    #[serde(default = "default_colors")]
    pub colors: BTreeMap<String, String>,
}

/// Highlight-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether uncolored tokens (whitespace, punctuation) are listed.
    #[serde(default)]
    pub show_whitespace: bool,
}

fn default_indent_unit() -> u32 {
    2
}

fn default_tab_size() -> usize {
    4
}

fn default_colors() -> BTreeMap<String, String> {
    [
        (Category::HeaderKeyword, "1;34"),
        (Category::HeaderValue, "34"),
        (Category::String, "32"),
        (Category::Comment, "90"),
        (Category::Number, "35"),
        (Category::Atom, "36"),
        (Category::Operator, "33"),
        (Category::Def, "1;35"),
        (Category::Variable, "39"),
    ]
    .into_iter()
    .map(|(category, code)| (category.as_str().to_string(), code.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            indent_unit: default_indent_unit(),
            tab_size: default_tab_size(),
            highlight: HighlightConfig::default(),
            colors: default_colors(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_whitespace: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/dylext/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DylextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DylextError::Config(format!("Failed to parse configuration: {}", e))
        })?;
        config.validate()?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DylextError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.tab_size == 0 {
            return Err(DylextError::Validation(
                "tab_size must be at least 1".to_string(),
            ));
        }
        self.palette().map(|_| ())
    }

    /// Analyzer settings derived from this configuration.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            indent_unit: self.indent_unit,
            tab_size: self.tab_size,
        }
    }

    /// The `[colors]` table keyed by category.
    ///
    /// Categories missing from the table are left uncolored.
    pub fn palette(&self) -> Result<FxHashMap<Category, &str>> {
        let mut palette = FxHashMap::default();
        for (name, code) in &self.colors {
            let category: Category = name
                .parse()
                .map_err(|e| DylextError::Validation(format!("[colors] {}", e)))?;
            if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit() || c == ';') {
                return Err(DylextError::Validation(format!(
                    "[colors] {}: invalid SGR code {:?}",
                    name, code
                )));
            }
            palette.insert(category, code.as_str());
        }
        Ok(palette)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("dylext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("dylext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        let mut colors = default_colors();
        colors.insert("def".to_string(), "4;31".to_string());
        Config {
            verbose: true,
            indent_unit: 4,
            tab_size: 8,
            highlight: HighlightConfig {
                format: OutputFormat::Json,
                show_whitespace: true,
            },
            colors,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.indent_unit, 2);
        assert_eq!(config.tab_size, 4);
        assert_eq!(config.highlight.format, OutputFormat::Text);
        assert!(!config.highlight.show_whitespace);
        assert_eq!(config.colors.len(), Category::ALL.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/dylext.toml"));
        assert!(matches!(result, Err(DylextError::Config(_))));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "tab_size = 2\n[highlight]\nformat = \"ansi\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.tab_size, 2);
        assert_eq!(config.indent_unit, 2);
        assert_eq!(config.highlight.format, OutputFormat::Ansi);
        assert_eq!(config.colors, default_colors());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "tab_size = \"wide\"").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(DylextError::Config(_))));
    }

    #[test]
    fn test_zero_tab_size_is_rejected() {
        let config = Config {
            tab_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(DylextError::Validation(_))));
    }

    #[test]
    fn test_unknown_color_category_is_rejected() {
        let mut config = Config::default();
        config.colors.insert("keyword".to_string(), "31".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("keyword"));
    }

    #[test]
    fn test_bad_sgr_code_is_rejected() {
        let mut config = Config::default();
        config.colors.insert("def".to_string(), "\u{1b}[31m".to_string());
        assert!(matches!(config.validate(), Err(DylextError::Validation(_))));
    }

    #[test]
    fn test_palette_and_analyzer_config() {
        let config = create_test_config();
        let palette = config.palette().unwrap();
        assert_eq!(palette.get(&Category::Def), Some(&"4;31"));
        assert_eq!(palette.get(&Category::String), Some(&"32"));

        let analyzer = config.analyzer_config();
        assert_eq!(analyzer.indent_unit, 4);
        assert_eq!(analyzer.tab_size, 8);
    }
}
