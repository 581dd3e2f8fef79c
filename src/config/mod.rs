//! Configuration layer for the `bagelpay` command-line tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values passed on the command line, or
//!    `BAGELPAY_API_KEY` for the API key
//! 2. **TOML config file** - Values from the `[client]` section
//! 3. **Built-in defaults** - Test mode, the mode's base URL, 30s timeout
//!
//! The API key has no default. API commands fail with
//! [`ConfigError::MissingRequired`] when neither source provides one.
//!
//! # Boolean Flag Semantics
//!
//! `--live` only enables live mode. Without it, `client.mode` from TOML
//! applies.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{
    ApiCommand, CheckoutArgs, CheckoutCommand, Cli, Command, ListCommand, PageArgs, ProductArgs,
    ProductCommand, SubscriptionCommand, VerifyArgs, WebhookCommand,
};
pub use error::{ConfigError, field};
pub use toml::{ClientSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
