//! Command execution.
//!
//! API commands issue one request each and print the decoded record as
//! pretty JSON. `webhook verify` runs offline against a captured body.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tokio::signal;

use bagelpay::config::{
    ApiCommand, CheckoutCommand, ListCommand, ProductCommand, SubscriptionCommand, ValidatedConfig,
    VerifyArgs,
};
use bagelpay::transport::HttpClient;
use bagelpay::webhook::{WebhookError, WebhookVerifier};
use bagelpay::{BagelPayClient, BagelPayError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] BagelPayError),

    /// Failed to read the captured webhook body.
    #[error("Failed to read webhook body '{}': {source}", path.display())]
    BodyRead {
        /// Path given with `--body-file`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The webhook delivery was rejected.
    #[error("Webhook rejected: {0}")]
    Webhook(#[from] WebhookError),

    /// Failed to render the result as JSON.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    /// A shutdown signal arrived before the request completed.
    #[error("Interrupted before the request completed")]
    Interrupted,
}

/// Executes one API command and prints its result.
///
/// The in-flight request is dropped if Ctrl+C or SIGTERM arrives first.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the request fails,
/// or the command is interrupted.
pub async fn execute(config: &ValidatedConfig, command: &ApiCommand) -> Result<(), RunError> {
    let client = BagelPayClient::new(&config.client)?;

    let output = tokio::select! {
        result = dispatch(&client, command) => result?,
        () = shutdown_signal() => {
            tracing::info!("Shutdown signal received, cancelling request");
            return Err(RunError::Interrupted);
        }
    };

    print_json(&output)
}

/// Runs `command` against `client` and returns the decoded record as JSON.
async fn dispatch<H: HttpClient>(
    client: &BagelPayClient<H>,
    command: &ApiCommand,
) -> Result<Value, RunError> {
    match command {
        ApiCommand::Products(command) => products(client, command).await,
        ApiCommand::Checkout(CheckoutCommand::Create(args)) => {
            to_value(client.create_checkout(&args.to_request()).await?)
        }
        ApiCommand::Subscriptions(command) => subscriptions(client, command).await,
        ApiCommand::Customers(ListCommand::List(page)) => {
            to_value(client.list_customers((*page).into()).await?)
        }
        ApiCommand::Transactions(ListCommand::List(page)) => {
            to_value(client.list_transactions((*page).into()).await?)
        }
    }
}

async fn products<H: HttpClient>(
    client: &BagelPayClient<H>,
    command: &ProductCommand,
) -> Result<Value, RunError> {
    match command {
        ProductCommand::List(page) => to_value(client.list_products((*page).into()).await?),
        ProductCommand::Get { product_id } => to_value(client.get_product(product_id).await?),
        ProductCommand::Create(args) => to_value(client.create_product(&args.to_request()).await?),
        ProductCommand::Update {
            product_id,
            product,
        } => {
            let request = bagelpay::models::UpdateProductRequest::new(product_id, product.to_request());
            to_value(client.update_product(&request).await?)
        }
        ProductCommand::Archive { product_id } => {
            to_value(client.archive_product(product_id).await?)
        }
        ProductCommand::Unarchive { product_id } => {
            to_value(client.unarchive_product(product_id).await?)
        }
    }
}

async fn subscriptions<H: HttpClient>(
    client: &BagelPayClient<H>,
    command: &SubscriptionCommand,
) -> Result<Value, RunError> {
    match command {
        SubscriptionCommand::List(page) => {
            to_value(client.list_subscriptions((*page).into()).await?)
        }
        SubscriptionCommand::Get { subscription_id } => {
            to_value(client.get_subscription(subscription_id).await?)
        }
        SubscriptionCommand::Cancel { subscription_id } => {
            to_value(client.cancel_subscription(subscription_id).await?)
        }
    }
}

/// Verifies a captured webhook delivery and returns its event as JSON.
///
/// # Errors
///
/// Returns an error if the body cannot be read or the delivery is
/// rejected.
pub fn verify_webhook(args: &VerifyArgs) -> Result<Value, RunError> {
    let body = std::fs::read(&args.body_file).map_err(|e| RunError::BodyRead {
        path: args.body_file.clone(),
        source: e,
    })?;

    let mut verifier = WebhookVerifier::new(&args.secret);
    if let Some(secs) = args.tolerance {
        verifier = verifier.with_tolerance(Duration::from_secs(secs));
    }

    let event = verifier.verify_and_parse(&body, &args.timestamp, &args.signature)?;
    tracing::info!(event_type = %event.event_type, "Webhook signature verified");

    Ok(json!({
        "event_type": event.event_type,
        "payload": event.payload,
    }))
}

/// Prints `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn print_json(value: &Value) -> Result<(), RunError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn to_value<T: Serialize>(value: T) -> Result<Value, RunError> {
    Ok(serde_json::to_value(value)?)
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
