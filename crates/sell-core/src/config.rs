use anyhow::Result;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the address to bind, in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Checks that the level names a known `tracing` level.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for anything other than
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub fn validate(&self) -> CoreResult<()> {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(CoreError::InvalidConfiguration(format!(
                "unknown logging level '{other}'"
            ))),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            Self::defaults()?
                // TOML file
                .add_source(config::File::with_name("config.toml").required(false))
                // Env
                .add_source(environment()),
        )
    }

    /// ## Summary
    /// Returns a builder holding only the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Builds `Settings` from an already assembled set of sources.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.build()?.try_deserialize::<Settings>()?;

        tracing::debug!(host = %settings.server.host, port = settings.server.port, "Settings loaded");

        Ok(settings)
    }
}

/// Environment source: `SERVER_PORT` maps to `server.port`.
fn environment() -> Environment {
    Environment::default()
        .convert_case(config::Case::Snake)
        .separator("_")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
