//! Configuration management for kaskod.
//!
//! Loads settings from /etc/kasko/config.toml or uses defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::pricing;

/// Config file path
pub const CONFIG_PATH: &str = "/etc/kasko/config.toml";

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KaskodConfig {
    /// Address the HTTP server binds to. Localhost only by default.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Base monthly premium in USD before the risk adjustment.
    #[serde(default = "default_base_rate_usd")]
    pub base_rate_usd: f64,

    /// Optional model coefficient override file.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_base_rate_usd() -> f64 {
    pricing::DEFAULT_BASE_RATE_USD
}

impl Default for KaskodConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            base_rate_usd: default_base_rate_usd(),
            model_path: None,
        }
    }
}

impl KaskodConfig {
    /// Load config from file, or return defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: KaskodConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = KaskodConfig::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert_eq!(config.base_rate_usd, 50.0);
        assert!(config.model_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_rate_usd = 65.0").unwrap();

        let config = KaskodConfig::load(file.path()).unwrap();
        assert_eq!(config.base_rate_usd, 65.0);
        assert_eq!(config.bind, "127.0.0.1:5000");
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "bind = \"127.0.0.1:6100\"\n\
             base_rate_usd = 42.0\n\
             model_path = \"/var/lib/kasko/model.toml\""
        )
        .unwrap();

        let config = KaskodConfig::load(file.path()).unwrap();
        assert_eq!(config.bind, "127.0.0.1:6100");
        assert_eq!(config.base_rate_usd, 42.0);
        assert_eq!(
            config.model_path.as_deref(),
            Some(Path::new("/var/lib/kasko/model.toml"))
        );
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = [not toml").unwrap();
        assert!(KaskodConfig::load(file.path()).is_err());
    }
}
