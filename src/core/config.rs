use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_MFAPI_URL: &str = "https://api.mfapi.in";
pub const DEFAULT_PREDICTION_URL: &str = "https://pred-mod-776087882401.europe-west1.run.app";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MfApiProviderConfig {
    pub base_url: String,
}

impl Default for MfApiProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MFAPI_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PredictionProviderConfig {
    pub base_url: String,
}

impl Default for PredictionProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PREDICTION_URL.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub mfapi: MfApiProviderConfig,
    #[serde(default)]
    pub prediction: PredictionProviderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Loads the config from the default location, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "navcandle", "navcandle")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  mfapi:
    base_url: "http://example.com/mfapi"
  prediction:
    base_url: "http://example.com/predict"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.mfapi.base_url, "http://example.com/mfapi");
        assert_eq!(
            config.providers.prediction.base_url,
            "http://example.com/predict"
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.providers.mfapi.base_url, DEFAULT_MFAPI_URL);

        let config: AppConfig = serde_yaml::from_str(
            r#"
providers:
  mfapi:
    base_url: "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(config.providers.mfapi.base_url, "http://localhost:8080");
        assert_eq!(
            config.providers.prediction.base_url,
            DEFAULT_PREDICTION_URL
        );
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AppConfig::load_from_path(dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
