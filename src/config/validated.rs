//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::client::{self, ClientConfig, Mode, mask_key};

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings for the API client
    pub client: ClientConfig,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ mode: {}, base_url: {}, timeout: {}s, api_key: {} }}",
            self.client.mode,
            self.client.base_url(),
            self.client.timeout.as_secs(),
            mask_key(self.client.api_key()),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is missing or blank
    /// - The mode is not `test` or `live`
    /// - The base URL is not an http(s) URL
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_key = Self::resolve_api_key(cli, toml)?;
        let mode = Self::resolve_mode(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        let mut client = ClientConfig::new(api_key)
            .with_mode(mode)
            .with_timeout(timeout);

        if let Some(base_url) = Self::resolve_base_url(cli, toml)? {
            client = client.with_base_url(base_url);
        }

        Ok(Self {
            client,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_api_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.api_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.api_key.as_deref()))
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigError::missing(
                    field::API_KEY,
                    "Use --api-key, set BAGELPAY_API_KEY, or set client.api_key in config file",
                )
            })
    }

    fn resolve_mode(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Mode, ConfigError> {
        // --live only enables; it never forces test mode
        if cli.live {
            return Ok(Mode::Live);
        }

        match toml.and_then(|t| t.client.mode.as_deref()) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidMode {
                value: value.to_string(),
            }),
            None => Ok(Mode::default()),
        }
    }

    fn resolve_base_url(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<String>, ConfigError> {
        let Some(url_str) = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.base_url.as_deref()))
        else {
            return Ok(None);
        };

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Some(url_str.to_string()))
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.client.timeout))
            .unwrap_or(client::defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
