//! Render configuration from blockpress.toml

use crate::renderer::{ListMode, RenderContext, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the configuration file
pub const CONFIG_FILE_NAME: &str = "blockpress.toml";

/// Render settings from blockpress.toml
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Page title for documents that have none
    pub site_title: Option<String>,

    /// Render with the dark theme
    pub dark_mode: bool,

    /// Nested list handling
    pub list_mode: ListMode,

    /// Deepest block or link nesting that is rendered
    pub max_depth: usize,

    /// Write full HTML pages instead of fragments
    pub standalone: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            site_title: None,
            dark_mode: false,
            list_mode: ListMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            standalone: true,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a blockpress.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RenderConfig)` - Successfully loaded configuration
    /// * `Err(RenderConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RenderConfigError> {
        let content = fs::read_to_string(&path).map_err(RenderConfigError::IoError)?;

        let config: RenderConfig =
            toml::from_str(&content).map_err(RenderConfigError::ParseError)?;

        Ok(config)
    }

    /// Save configuration to a blockpress.toml file
    ///
    /// # Parameters
    /// * `path` - Path where the configuration file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(RenderConfigError)` - Error serializing or writing the configuration file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderConfigError> {
        let content = toml::to_string_pretty(self).map_err(RenderConfigError::SerializeError)?;

        fs::write(&path, content).map_err(RenderConfigError::IoError)?;

        Ok(())
    }

    /// The render context described by this configuration
    pub fn context(&self) -> RenderContext {
        RenderContext::new(self.dark_mode)
            .with_list_mode(self.list_mode)
            .with_max_depth(self.max_depth)
    }
}

/// Errors that can occur when loading or saving render configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum RenderConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderConfigError::IoError(e) => write!(f, "IO error: {}", e),
            RenderConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            RenderConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for RenderConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_roundtrip() {
        let config = RenderConfig {
            site_title: Some("Docs".to_string()),
            dark_mode: true,
            list_mode: ListMode::Flat,
            max_depth: 8,
            standalone: false,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("list_mode = \"flat\""));

        let parsed: RenderConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: RenderConfig = toml::from_str("dark_mode = true\n").unwrap();
        assert!(parsed.dark_mode);
        assert!(parsed.standalone);
        assert_eq!(parsed.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(parsed.list_mode, ListMode::Nested);
        assert_eq!(parsed.site_title, None);
    }

    #[test]
    fn test_context_carries_settings() {
        let config = RenderConfig {
            dark_mode: true,
            list_mode: ListMode::Flat,
            max_depth: 3,
            ..RenderConfig::default()
        };
        let ctx = config.context();
        assert!(ctx.dark_mode);
        assert_eq!(ctx.list_mode, ListMode::Flat);
        assert_eq!(ctx.max_depth, 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = RenderConfig {
            site_title: Some("Handbook".to_string()),
            ..RenderConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(RenderConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_list_mode_is_a_parse_error() {
        let err = toml::from_str::<RenderConfig>("list_mode = \"sideways\"\n").unwrap_err();
        let err = RenderConfigError::ParseError(err);
        assert!(err.to_string().starts_with("TOML parse error"));
    }
}
