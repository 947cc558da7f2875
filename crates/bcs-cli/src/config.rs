//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use bcs_domain::Tier;
use bcs_store::Resolver;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Corpus directory looked for under the working directory when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "data";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Corpus directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Tier order tried when no tier flag is given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_order: Vec<String>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".bcs").join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Pick the corpus directory.
    ///
    /// Precedence: the `--data-dir` flag or `BCS_DATA_DIR` (clap merges the
    /// two), then the config file, then `./data` if it exists, then `.`.
    pub fn data_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        if let Some(dir) = flag.or_else(|| self.data_dir.clone()) {
            return dir;
        }
        let local = PathBuf::from(DEFAULT_DATA_DIR);
        if local.is_dir() {
            local
        } else {
            PathBuf::from(".")
        }
    }

    /// Parsed fallback order.
    pub fn fallback_tiers(&self) -> Result<Vec<Tier>> {
        self.fallback_order
            .iter()
            .map(|name| {
                Tier::parse(name)
                    .ok_or_else(|| CliError::Config(format!("Unknown tier in fallback_order: '{}'", name)))
            })
            .collect()
    }

    /// Resolver for best-tier lookups.
    ///
    /// `preferred` (the corpus default tier) goes first, then the configured order.
    pub fn resolver(&self, preferred: Option<Tier>) -> Result<Resolver> {
        let mut order: Vec<Tier> = preferred.into_iter().collect();
        order.extend(self.fallback_tiers()?);
        Ok(Resolver::with_fallback(order))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.resolver(None).unwrap().fallback(), &Tier::ALL);
    }

    #[test]
    fn test_load_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            "data_dir = \"/srv/bcs/data\"\nfallback_order = [\"summary\", \"Rulet\"]\n\n[settings]\ncolor = false\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/bcs/data")));
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.fallback_tiers().unwrap(), vec![Tier::Summary, Tier::Rulet]);
    }

    #[test]
    fn test_data_dir_precedence() {
        let config = Config {
            data_dir: Some(PathBuf::from("from-config")),
            ..Config::default()
        };
        assert_eq!(config.data_dir(Some(PathBuf::from("from-flag"))), PathBuf::from("from-flag"));
        assert_eq!(config.data_dir(None), PathBuf::from("from-config"));
    }

    #[test]
    fn test_preferred_tier_leads_fallback() {
        let config = Config {
            fallback_order: vec!["abstract".into()],
            ..Config::default()
        };
        let resolver = config.resolver(Some(Tier::Rulet)).unwrap();
        assert_eq!(&resolver.fallback()[..2], &[Tier::Rulet, Tier::Abstract]);
    }

    #[test]
    fn test_unknown_fallback_tier() {
        let config = Config {
            fallback_order: vec!["verbose".into()],
            ..Config::default()
        };
        assert!(matches!(config.resolver(None), Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        assert!(Config::load_from(Path::new("/nonexistent/bcs/config.toml")).is_err());
    }
}
