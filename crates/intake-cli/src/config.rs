//! Run configuration: an optional TOML file plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use intake_model::IngestConfig;

/// Environment variable naming a default configuration file.
pub const CONFIG_ENV: &str = "INTAKE_CONFIG";

/// Loads an [`IngestConfig`] from a TOML file, or the defaults when no path is
/// given. Keys missing from the file keep their default values.
pub fn load_config(path: Option<&Path>) -> Result<IngestConfig> {
    let Some(path) = path else {
        return Ok(IngestConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let config: IngestConfig = toml::from_str(&content)
        .with_context(|| format!("parse config file {}", path.display()))?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Values given on the command line. Each one that is set replaces the
/// corresponding configuration value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub max_file_size: Option<u64>,
    pub header_search_rows: Option<usize>,
    pub pivot_window: Option<i32>,
    pub reference_year: Option<i32>,
    pub encoding: Option<String>,
    pub failure_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: IngestConfig) -> IngestConfig {
        if let Some(value) = self.max_file_size {
            config.max_file_size = value;
        }
        if let Some(value) = self.header_search_rows {
            config.header_search_rows = value;
        }
        if let Some(value) = self.pivot_window {
            config.two_digit_year_pivot = value;
        }
        if let Some(value) = self.reference_year {
            config.reference_year = Some(value);
        }
        if let Some(value) = self.encoding {
            config.encoding = value;
        }
        if let Some(value) = self.failure_dir {
            config.failure_dir = Some(value);
        }
        config
    }
}

/// Loads the file, applies overrides, and validates the result.
pub fn resolve_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<IngestConfig> {
    let config = overrides.apply(load_config(path)?);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), IngestConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intake.toml");
        fs::write(&path, "header_search_rows = 5\nencoding = \"latin1\"\n").unwrap();

        let overrides = ConfigOverrides {
            encoding: Some("utf-16le".to_string()),
            failure_dir: Some(PathBuf::from("/tmp/failures")),
            ..ConfigOverrides::default()
        };
        let config = resolve_config(Some(&path), overrides).unwrap();

        assert_eq!(config.header_search_rows, 5);
        assert_eq!(config.encoding, "utf-16le");
        assert_eq!(config.failure_dir, Some(PathBuf::from("/tmp/failures")));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = ConfigOverrides {
            pivot_window: Some(150),
            ..ConfigOverrides::default()
        };
        let err = resolve_config(None, overrides).unwrap_err();
        assert!(format!("{err:#}").contains("between 0 and 99"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_config(Some(Path::new("/nonexistent/intake.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/intake.toml"));
    }
}
