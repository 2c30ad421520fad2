//! Global context for CLI commands

use anyhow::{Context as _, Result};
use redzone_core::RedzoneError;
use redzone_core::config::{Config, consts::CONFIG_FILE};
use redzone_core::template::{Template, TemplateEngine};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Engine configured from redzone.toml and command-line search paths
pub struct Context {
    pub engine: TemplateEngine,
    pub verbose: bool,
}

impl Context {
    /// Load configuration and build the engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit `--config` file cannot be read or parsed
    /// - `./redzone.toml` exists but is invalid
    pub fn new(config_path: Option<&Path>, extra_paths: &[PathBuf], verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::from_file(path)?,
            None => {
                let default_path = env::current_dir()?.join(CONFIG_FILE);
                if default_path.is_file() {
                    Config::from_file(&default_path)?
                } else {
                    Config::default()
                }
            }
        };

        let engine_config = config
            .to_engine_config()
            .search_paths(extra_paths.iter().cloned());
        log::debug!(
            "template search paths: {:?}",
            engine_config.search_path_list()
        );

        Ok(Self {
            engine: TemplateEngine::with_config(engine_config),
            verbose,
        })
    }

    /// Compile a template given as a file path or a template name
    ///
    /// Existing files are read directly; anything else goes through the
    /// search paths.
    pub fn compile(&self, template: &str) -> Result<Template> {
        let path = Path::new(template);
        let compiled = if path.is_file() {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template '{}'", path.display()))?;
            self.engine.compile(&source)
        } else {
            self.engine.compile_file(template)
        };

        Ok(compiled.map_err(RedzoneError::from)?)
    }
}
