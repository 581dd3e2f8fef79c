//! BagelPay: client for the BagelPay payment API.
//!
//! A library for creating checkout sessions, managing products,
//! subscriptions and customers, listing transactions, and verifying
//! signed webhook deliveries.
//!
//! # Example
//!
//! ```no_run
//! use bagelpay::BagelPayClient;
//! use bagelpay::models::Pagination;
//!
//! # async fn example() -> bagelpay::Result<()> {
//! let client = BagelPayClient::test(std::env::var("BAGELPAY_API_KEY").unwrap_or_default())?;
//! let page = client.list_products(Pagination::new(1, 10)).await?;
//! println!("{} products", page.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod time;
pub mod transport;
pub mod webhook;

pub use client::{BagelPayClient, ClientConfig, Mode};
pub use error::{ApiError, ApiErrorKind, BagelPayError, Result};
