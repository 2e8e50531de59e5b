/// Site configuration
///
/// Everything that differs between deployments of the showcase: brand
/// name, where the images live, an optional portfolio file, and the contact
/// channels. The file is JSON and every field is optional.
///
/// The config file is looked up at:
/// - `$SHOWCASE_CONFIG` if set
/// - Linux: ~/.config/brand-showcase/site.json
/// - macOS: ~/Library/Application Support/brand-showcase/site.json
/// - Windows: %APPDATA%\brand-showcase\site.json
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::data::Catalog;
use crate::error::ConfigError;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SHOWCASE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the header, footer and window title
    pub brand_name: String,
    /// Directory image references are resolved against (like a web `public/` folder)
    pub assets_dir: PathBuf,
    /// JSON array of portfolio entries; the built-in catalog is used when unset
    pub portfolio_file: Option<PathBuf>,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    /// International format, digits only (no leading `+`)
    pub whatsapp_number: String,
    /// Prefilled WhatsApp message
    pub whatsapp_greeting: String,
    /// Meeting scheduler (Calendly)
    pub booking_url: String,
    /// Call scheduler (cal.com)
    pub call_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "GraphicsEnterprise".to_string(),
            assets_dir: PathBuf::from("public"),
            portfolio_file: None,
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "contact@designer.example".to_string(),
            whatsapp_number: "2348012345678".to_string(),
            whatsapp_greeting: "Hi — I want to discuss an enterprise branding project.".to_string(),
            booking_url: "https://calendly.com/your-link".to_string(),
            call_url: "https://cal.com/your-username".to_string(),
        }
    }
}

impl SiteConfig {
    /// Where the config file is expected to be
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("brand-showcase");
        path.push("site.json");
        Some(path)
    }

    /// Load the config from its standard location.
    ///
    /// A missing file gives the defaults. A broken file is logged and also
    /// gives the defaults, so the showcase always starts.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("⚠️  Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("📁 Config loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("⚠️  {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Read a config file. Relative paths inside it are resolved against
    /// the directory holding the file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.assets_dir = base.join(&config.assets_dir);
            config.portfolio_file = config.portfolio_file.map(|file| base.join(file));
        }

        Ok(config)
    }

    /// The portfolio catalog this config points at
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.portfolio_file else {
            return Ok(Catalog::builtin());
        };

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        Catalog::from_json(&json).map_err(|source| ConfigError::Catalog {
            path: path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact.whatsapp_number, "2348012345678");
    }

    #[test]
    fn test_partial_contact_keeps_other_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"contact": {"email": "hello@studio.example"}}"#).unwrap();

        assert_eq!(config.contact.email, "hello@studio.example");
        assert_eq!(config.contact.booking_url, "https://calendly.com/your-link");
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(
            &path,
            r#"{"assets_dir": "img", "portfolio_file": "work.json"}"#,
        )
        .unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.assets_dir, dir.path().join("img"));
        assert_eq!(config.portfolio_file, Some(dir.path().join("work.json")));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            SiteConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let catalog = SiteConfig::default().catalog().unwrap();
        assert_eq!(catalog.list()[0].title, "Project Alpha");
    }

    #[test]
    fn test_catalog_from_portfolio_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("work.json"),
            r#"[{"id": "w1", "title": "Rebrand", "images": ["/w1.jpg"]}]"#,
        )
        .unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{"portfolio_file": "work.json"}"#).unwrap();

        let catalog = SiteConfig::from_file(&path).unwrap().catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0].id, "w1");
    }

    #[test]
    fn test_invalid_portfolio_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("work.json");
        fs::write(
            &file,
            r#"[{"id": "w1", "title": "A"}, {"id": "w1", "title": "B"}]"#,
        )
        .unwrap();

        let config = SiteConfig {
            portfolio_file: Some(file),
            ..SiteConfig::default()
        };
        assert!(matches!(config.catalog(), Err(ConfigError::Catalog { .. })));
    }
}
