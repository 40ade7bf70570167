// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{LOG_LEVEL, SERVER_HOST, SERVER_PORT};

/// Prefix of environment variables read by [`ServerConfig::load_with_env`].
pub const ENV_PREFIX: &str = "GREETER";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// One of TRACE, DEBUG, INFO, WARN, ERROR.
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            ConfigError::Message("Invalid path: contains non-UTF8 characters".to_string())
        })?;

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration with custom file path and `GREETER_*` environment
    /// variable overrides
    pub fn load_with_env(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::build(
            config_path,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    fn build(config_path: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Add config file source
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        } else {
            // Try default config file names
            builder = builder
                .add_source(File::with_name("config.yaml").required(false))
                .add_source(File::with_name("config.yml").required(false));
        }

        // Environment wins over files
        let config = builder.add_source(env).build()?;
        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_owned(),
            port: SERVER_PORT,
            log_level: LOG_LEVEL.to_owned(),
        }
    }
}
