//! Configuration management for weighcheck
//!
//! Config stored at: ~/.config/weighcheck/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use weighcheck_domain::constants::lookup;
use weighcheck_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Jurisdiction used when neither the command line nor a ticket names one
    #[serde(default)]
    pub default_jurisdiction: Option<String>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Directory for Excel exports when no explicit path is given
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_jurisdiction: None,
            output_format: default_output_format(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("weighcheck");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Jurisdiction to evaluate against: explicit choice first, then the configured default
    pub fn resolve_jurisdiction<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or(self.default_jurisdiction.as_deref())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Weighcheck Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        let jurisdiction = lookup(self.default_jurisdiction.as_deref());
        writeln!(
            f,
            "Default jurisdiction: {} ({})",
            self.default_jurisdiction.as_deref().unwrap_or("(federal)"),
            jurisdiction.name
        )?;
        writeln!(f, "Output format:        {}", self.output_format)?;
        writeln!(
            f,
            "Export dir:           {}",
            self.export_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(current directory)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:          {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use weighcheck_types::Error;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            default_jurisdiction: Some("TX".to_string()),
            output_format: OutputFormat::Json,
            export_dir: None,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_jurisdiction": "NY"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_jurisdiction.as_deref(), Some("NY"));
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_resolve_jurisdiction() {
        let config = Config {
            default_jurisdiction: Some("CA".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_jurisdiction(Some("TX")), Some("TX"));
        assert_eq!(config.resolve_jurisdiction(None), Some("CA"));
        assert_eq!(Config::default().resolve_jurisdiction(None), None);
    }
}
