use crate::error::{RedzoneError, Result};
use crate::template::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// redzone.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directories searched in order; relative entries are resolved against
    /// the config file's directory by [`Config::from_file`]
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,

    /// Extension tried for template names that have none (without the dot)
    #[serde(default)]
    pub extension: Option<String>,
}

impl Config {
    /// Read redzone.toml and anchor relative search paths at its directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RedzoneError::ConfigParseError(format!("{}: {}", path.display(), e)))?;

        let mut config = Self::from_toml(&content)?;
        if let Some(base) = path.parent() {
            config.anchor_search_paths(base);
        }
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| RedzoneError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write redzone.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RedzoneError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }

    /// Engine configuration with the built-in tags
    pub fn to_engine_config(&self) -> EngineConfig {
        let config = EngineConfig::new().search_paths(self.templates.search_paths.iter().cloned());
        match &self.templates.extension {
            Some(ext) => config.extension(ext.clone()),
            None => config,
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(ext) = &self.templates.extension {
            let ext = ext.trim_start_matches('.');
            if ext.is_empty() || ext.contains(['/', '\\']) {
                return Err(RedzoneError::ConfigInvalidValue {
                    field: "templates.extension".to_string(),
                    reason: format!("'{}' is not a file extension", ext),
                });
            }
        }
        Ok(())
    }

    fn anchor_search_paths(&mut self, base: &Path) {
        for dir in &mut self.templates.search_paths {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
}
