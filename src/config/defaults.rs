//! Default values for command-line options.
//!
//! Client defaults (base URLs, timeout, user agent) live in
//! [`crate::client::defaults`].

/// File written by `bagelpay init` when no output path is given.
pub const CONFIG_FILE: &str = "bagelpay.toml";

/// First page of list commands.
pub const PAGE_NUM: u32 = 1;

/// Records per page of list commands.
pub const PAGE_SIZE: u32 = 10;

/// Currency for `products create` and `products update`.
pub const CURRENCY: &str = "USD";
