//! Placeholder payload store.
//!
//! The four payloads (three static placeholders plus the logo template)
//! are read once at startup and never mutated, so the store can be shared
//! by any number of concurrent requests without locking.

use std::path::Path;

use crate::config::PlaceholderConfig;
use crate::errors::AppError;

/// Immutable placeholder payloads, loaded once at startup.
#[derive(Debug)]
pub struct PlaceholderAssets {
    wide: String,
    icon: String,
    full: String,
    template: String,
}

impl PlaceholderAssets {
    /// Load every payload from the configured paths.
    ///
    /// A missing or unreadable source is a startup-time configuration
    /// error; there is no partial-degradation mode.
    pub fn load(config: &PlaceholderConfig) -> Result<Self, AppError> {
        Ok(Self {
            wide: read_payload(&config.wide_path)?,
            icon: read_payload(&config.icon_path)?,
            full: read_payload(&config.full_path)?,
            template: read_payload(&config.template_path)?,
        })
    }

    /// Build a store from in-memory payloads. Lets tests substitute small
    /// fixture strings for the real SVG files.
    pub fn from_parts(
        wide: impl Into<String>,
        icon: impl Into<String>,
        full: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            wide: wide.into(),
            icon: icon.into(),
            full: full.into(),
            template: template.into(),
        }
    }

    /// Wide (2:1) banner placeholder payload
    pub fn wide(&self) -> &str {
        &self.wide
    }

    /// Square icon placeholder payload
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Full-size placeholder payload
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Logo template payload, carrying the `{{name}}` and `{{fontSize}}`
    /// substitution tokens
    pub fn template(&self) -> &str {
        &self.template
    }
}

fn read_payload(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::asset_load(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_config(dir: &Path) -> PlaceholderConfig {
        PlaceholderConfig {
            wide_path: dir.join("wide.svg"),
            icon_path: dir.join("icon.svg"),
            full_path: dir.join("full.svg"),
            template_path: dir.join("template.svg"),
        }
    }

    #[test]
    fn test_load_reads_all_payloads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wide.svg"), "w").unwrap();
        std::fs::write(dir.path().join("icon.svg"), "i").unwrap();
        std::fs::write(dir.path().join("full.svg"), "f").unwrap();
        std::fs::write(dir.path().join("template.svg"), "t {{name}}").unwrap();

        let assets = PlaceholderAssets::load(&fixture_config(dir.path())).unwrap();
        assert_eq!(assets.wide(), "w");
        assert_eq!(assets.icon(), "i");
        assert_eq!(assets.full(), "f");
        assert_eq!(assets.template(), "t {{name}}");
    }

    #[test]
    fn test_load_fails_on_missing_payload() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wide.svg"), "w").unwrap();
        std::fs::write(dir.path().join("icon.svg"), "i").unwrap();
        std::fs::write(dir.path().join("full.svg"), "f").unwrap();
        // template.svg deliberately absent

        let err = PlaceholderAssets::load(&fixture_config(dir.path())).unwrap_err();
        match err {
            AppError::AssetLoad { path, .. } => {
                assert_eq!(path, dir.path().join("template.svg"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_fails_on_unreadable_directory() {
        let config = PlaceholderConfig {
            wide_path: PathBuf::from("/nonexistent/wide.svg"),
            icon_path: PathBuf::from("/nonexistent/icon.svg"),
            full_path: PathBuf::from("/nonexistent/full.svg"),
            template_path: PathBuf::from("/nonexistent/template.svg"),
        };
        assert!(PlaceholderAssets::load(&config).is_err());
    }
}
