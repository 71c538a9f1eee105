use std::path::{Path, PathBuf};

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

impl InputConfig {
    /// ## Summary
    /// Returns the configured input file.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if no input path was configured.
    pub fn require_path(&self) -> CoreResult<&Path> {
        self.path.as_deref().ok_or_else(|| {
            CoreError::ConfigError(
                "no input file given (pass a path or set VCARDKIT_INPUT_PATH)".to_string(),
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Vcard,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `config.toml`, environment variables
    /// and an optional input path override, in increasing precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(input_override: Option<String>) -> Result<Self> {
        Ok(Config::builder()
            .set_default("output.format", "vcard")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file and process environment
            .add_source(
                config::Environment::with_prefix("VCARDKIT")
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .set_override_option("input.path", input_override)?
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(input_override: Option<String>) -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load(input_override)
}
