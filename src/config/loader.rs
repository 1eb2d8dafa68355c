//! Configuration loader.
//!
//! Layered loading with proper precedence: `default.toml`, then
//! `{environment}.toml`, then `local.toml`, then `FLEET__*` environment
//! variables. Setting `FLEET_CONFIG_FILE` bypasses layering and loads one
//! file only.

use std::path::{Path, PathBuf};

use config::{Config, Environment as EnvSource, File, FileFormat};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

const CONFIG_DIR_ENV: &str = "FLEET_CONFIG_DIR";
const CONFIG_FILE_ENV: &str = "FLEET_CONFIG_FILE";
const DEFAULT_CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "FLEET";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: Environment,
}

impl ConfigLoader {
    /// Builds a loader from the `FLEET_CONFIG_DIR`, `FLEET_CONFIG_FILE`, and
    /// `FLEET_APP_ENV` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::EnvVarError(
                "FLEET_CONFIG_DIR and FLEET_CONFIG_FILE cannot both be set".to_string(),
            ));
        }

        Ok(Self {
            config_dir,
            config_file,
            environment: Environment::from_env(),
        })
    }

    /// Loader rooted at an explicit directory, ignoring the env variables.
    pub fn with_config_dir(config_dir: impl Into<PathBuf>, environment: Environment) -> Self {
        Self {
            config_dir: config_dir.into(),
            config_file: None,
            environment,
        }
    }

    /// Loader for one explicit file, skipping layered loading.
    pub fn with_config_file(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(config_file.into()),
            environment: Environment::from_env(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Loads and validates settings from all sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = &self.config_file {
            if !file.exists() {
                return Err(ConfigError::FileNotFound(file.display().to_string()));
            }
            builder = builder.add_source(File::from(file.as_path()).format(FileFormat::Toml));
        } else {
            builder = builder
                .add_source(self.file_source("default").required(true))
                .add_source(self.file_source(self.environment.as_str()).required(false))
                .add_source(self.file_source("local").required(false));
        }

        builder = builder.add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn file_source(&self, name: &str) -> File<config::FileSourceFile, FileFormat> {
        File::from(Path::join(&self.config_dir, format!("{name}.toml"))).format(FileFormat::Toml)
    }
}
