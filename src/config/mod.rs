use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub storage: StorageConfig,
    pub placeholders: PlaceholderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Project home page, pointed at by the root endpoint
    pub home_page: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory served before the fallback pipeline gets involved
    pub static_root: PathBuf,
}

/// Paths of the four placeholder payloads. All must exist and be readable
/// at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderConfig {
    pub wide_path: PathBuf,
    pub icon_path: PathBuf,
    pub full_path: PathBuf,
    pub template_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 4000,
                home_page: "https://example.com/".to_string(),
            },
            storage: StorageConfig {
                static_root: PathBuf::from("./static"),
            },
            placeholders: PlaceholderConfig {
                wide_path: PathBuf::from("./assets/404-ar21.svg"),
                icon_path: PathBuf::from("./assets/404-icon.svg"),
                full_path: PathBuf::from("./assets/404-full.svg"),
                template_path: PathBuf::from("./assets/logo-template.svg"),
            },
        }
    }
}

impl Config {
    /// Load the configuration from a TOML file, writing the default file
    /// first when none exists. A `HOME_PAGE` environment variable overrides
    /// the configured home page.
    pub fn load(config_file: &str) -> Result<Self, AppError> {
        let mut config = if std::path::Path::new(config_file).exists() {
            let contents = std::fs::read_to_string(config_file).map_err(|e| {
                AppError::configuration(format!("failed to read {config_file}: {e}"))
            })?;
            toml::from_str(&contents).map_err(|e| {
                AppError::configuration(format!("failed to parse {config_file}: {e}"))
            })?
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)
                .map_err(|e| AppError::configuration(format!("failed to serialize: {e}")))?;
            std::fs::write(config_file, contents).map_err(|e| {
                AppError::configuration(format!("failed to write {config_file}: {e}"))
            })?;
            default_config
        };

        if let Ok(home_page) = std::env::var("HOME_PAGE") {
            config.web.home_page = home_page;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_round_trips_written_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let written = Config::load(path_str).unwrap();
        assert!(path.exists());

        let reloaded = Config::load(path_str).unwrap();
        assert_eq!(written.web.port, reloaded.web.port);
        assert_eq!(
            written.placeholders.wide_path,
            reloaded.placeholders.wide_path
        );
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(Config::load(path.to_str().unwrap()).is_err());
    }
}
