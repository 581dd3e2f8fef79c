//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{CheckoutRequest, CreateProductRequest, Pagination, RecurringInterval};

use super::defaults;

/// BagelPay: command-line client for the BagelPay payment API
///
/// Creates checkouts, manages products and subscriptions, lists customers
/// and transactions, and verifies webhook signatures.
#[derive(Debug, Parser)]
#[command(name = "bagelpay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// API key (required for API commands)
    #[arg(long = "api-key", env = "BAGELPAY_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Use the live environment instead of test
    #[arg(long, global = true)]
    pub live: bool,

    /// Override the API base URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for bagelpay
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Webhook utilities (no API key needed)
    #[command(subcommand)]
    Webhook(WebhookCommand),

    #[command(flatten)]
    Api(ApiCommand),
}

/// Commands that call the BagelPay API.
#[derive(Debug, Subcommand)]
pub enum ApiCommand {
    /// Manage products
    #[command(subcommand)]
    Products(ProductCommand),

    /// Create checkout sessions
    #[command(subcommand)]
    Checkout(CheckoutCommand),

    /// Inspect and cancel subscriptions
    #[command(subcommand)]
    Subscriptions(SubscriptionCommand),

    /// List customers
    #[command(subcommand)]
    Customers(ListCommand),

    /// List transactions
    #[command(subcommand)]
    Transactions(ListCommand),
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List products, newest first
    List(PageArgs),
    /// Show one product
    Get { product_id: String },
    /// Create a product
    Create(ProductArgs),
    /// Replace the fields of a product
    Update {
        product_id: String,
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Archive a product
    Archive { product_id: String },
    /// Restore an archived product
    Unarchive { product_id: String },
}

#[derive(Debug, Subcommand)]
pub enum CheckoutCommand {
    /// Create a checkout session for a product
    Create(CheckoutArgs),
}

#[derive(Debug, Subcommand)]
pub enum SubscriptionCommand {
    /// List subscriptions
    List(PageArgs),
    /// Show one subscription
    Get { subscription_id: String },
    /// Cancel a subscription
    Cancel { subscription_id: String },
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// List one page of records
    List(PageArgs),
}

#[derive(Debug, Subcommand)]
pub enum WebhookCommand {
    /// Verify a captured delivery and print its event
    Verify(VerifyArgs),
}

/// Page selection shared by list commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = defaults::PAGE_NUM)]
    pub page: u32,

    /// Records per page
    #[arg(long = "page-size", default_value_t = defaults::PAGE_SIZE)]
    pub page_size: u32,
}

impl From<PageArgs> for Pagination {
    fn from(args: PageArgs) -> Self {
        Self::new(args.page, args.page_size)
    }
}

/// Product fields for `create` and `update`.
///
/// Passing `--interval` makes the product a subscription; without it the
/// product is a single payment.
#[derive(Debug, Clone, Args)]
pub struct ProductArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Price in major currency units
    #[arg(long)]
    pub price: f64,

    /// ISO currency code
    #[arg(long, default_value = defaults::CURRENCY)]
    pub currency: String,

    /// Billing interval: daily, weekly, monthly, 3months or 6months
    #[arg(long)]
    pub interval: Option<RecurringInterval>,

    /// Free trial length in days (subscriptions only)
    #[arg(long = "trial-days", requires = "interval")]
    pub trial_days: Option<u32>,

    /// Product description
    #[arg(long)]
    pub description: Option<String>,

    /// Tax category, e.g. saas or digital-products
    #[arg(long = "tax-category")]
    pub tax_category: Option<String>,

    /// Price already includes tax
    #[arg(long = "tax-inclusive")]
    pub tax_inclusive: bool,
}

impl ProductArgs {
    /// Builds the request body these arguments describe.
    #[must_use]
    pub fn to_request(&self) -> CreateProductRequest {
        let mut request = match self.interval {
            Some(interval) => CreateProductRequest::subscription(
                &self.name,
                self.price,
                &self.currency,
                interval,
            ),
            None => CreateProductRequest::single_payment(&self.name, self.price, &self.currency),
        }
        .with_tax_inclusive(self.tax_inclusive);

        if let Some(days) = self.trial_days {
            request = request.with_trial_days(days);
        }
        if let Some(ref description) = self.description {
            request = request.with_description(description);
        }
        if let Some(ref category) = self.tax_category {
            request = request.with_tax_category(category);
        }
        request
    }
}

#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    /// Product to sell
    pub product_id: String,

    /// Customer email to prefill
    #[arg(long)]
    pub email: Option<String>,

    /// Caller-chosen idempotency reference
    #[arg(long = "request-id")]
    pub request_id: Option<String>,

    /// Quantity
    #[arg(long)]
    pub units: Option<String>,

    /// Redirect target after payment
    #[arg(long = "success-url")]
    pub success_url: Option<String>,

    /// Metadata in 'Key=Value' format (can be specified multiple times)
    #[arg(long = "metadata", value_name = "K=V", value_parser = parse_key_value)]
    pub metadata: Vec<(String, String)>,
}

impl CheckoutArgs {
    /// Builds the request body these arguments describe.
    #[must_use]
    pub fn to_request(&self) -> CheckoutRequest {
        let mut request = CheckoutRequest::new(&self.product_id);
        if let Some(ref email) = self.email {
            request = request.with_customer_email(email);
        }
        if let Some(ref id) = self.request_id {
            request = request.with_request_id(id);
        }
        if let Some(ref units) = self.units {
            request = request.with_units(units);
        }
        if let Some(ref url) = self.success_url {
            request = request.with_success_url(url);
        }
        for (key, value) in &self.metadata {
            request = request.with_metadata(key, value.as_str());
        }
        request
    }
}

#[derive(Debug, Clone, Args)]
pub struct VerifyArgs {
    /// Webhook endpoint secret
    #[arg(long, env = "BAGELPAY_WEBHOOK_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Value of the `timestamp` header
    #[arg(long)]
    pub timestamp: String,

    /// Value of the `bagelpay-signature` header
    #[arg(long)]
    pub signature: String,

    /// File holding the raw request body
    #[arg(long = "body-file")]
    pub body_file: PathBuf,

    /// Reject timestamps more than this many seconds from now
    #[arg(long, value_name = "SECS")]
    pub tolerance: Option<u64>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this command needs an API client.
    #[must_use]
    pub const fn needs_client(&self) -> bool {
        matches!(self.command, Command::Api(_))
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("invalid metadata '{s}': expected 'Key=Value'"))
}
