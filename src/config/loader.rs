//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.srpcalc.toml` in the working directory (or an explicit `--config` file)
//! 4. `<config dir>/srpcalc/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, ENV_FORMAT, ENV_NO_COLOR, ENV_OVERFLOW};
use crate::env::Env;
use crate::models::{OutputFormat, OverflowMode};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arithmetic: ArithmeticConfig,
    pub output: OutputConfig,
}

/// Arithmetic behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    pub overflow: OverflowMode,
}

/// Rendering behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory lookup and must exist.
    /// CLI flags are applied afterwards by the caller.
    pub fn load(
        work_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_with_global(global.as_deref(), work_dir, explicit, env)
    }

    /// Same as [`Config::load`], with the global config file given explicitly.
    ///
    /// A `global` path that does not exist is skipped.
    pub fn load_with_global(
        global: Option<&Path>,
        work_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();

        if let Some(global_path) = global {
            if global_path.exists() {
                layers.push(Self::read_table(global_path)?);
            }
        }

        match explicit {
            Some(path) => layers.push(Self::read_table(path)?),
            None => {
                if let Some(dir) = work_dir {
                    let local_path = dir.join(CONFIG_FILENAME);
                    if local_path.exists() {
                        layers.push(Self::read_table(&local_path)?);
                    }
                }
            }
        }

        let mut config = Self::from_layers(layers);
        config.apply_env_vars(env);
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load a config from a specific file, ignoring other layers.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let table = Self::read_table(path)?;
        Ok(Self::from_layers(vec![table]))
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Read one config file and check it deserializes on its own.
    fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
        let parse_error = |source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        };
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table = content.parse::<toml::Table>().map_err(parse_error)?;
        toml::Value::Table(table.clone())
            .try_into::<Config>()
            .map_err(parse_error)?;
        Ok(table)
    }

    /// Deep-merge validated file layers (later wins) into a config.
    ///
    /// A key only overrides an earlier layer when a later file sets it.
    fn from_layers(layers: Vec<toml::Table>) -> Self {
        let mut merged = toml::Table::new();
        for layer in layers {
            merge_tables(&mut merged, layer);
        }
        // Layers are validated one by one in `read_table`.
        toml::Value::Table(merged).try_into().unwrap_or_default()
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_OVERFLOW) {
            match val.parse::<OverflowMode>() {
                Ok(mode) => self.arithmetic.overflow = mode,
                Err(_) => tracing::warn!("ignoring invalid {ENV_OVERFLOW} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => tracing::warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }
        if env.flag(ENV_NO_COLOR) {
            self.output.color = false;
        }
    }

    /// Apply CLI flag overrides (highest priority).
    pub fn apply_overrides(
        &mut self,
        overflow: Option<OverflowMode>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) {
        if let Some(mode) = overflow {
            self.arithmetic.overflow = mode;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        if no_color {
            self.output.color = false;
        }
    }
}

fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}
