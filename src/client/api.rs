//! The BagelPay API client.

use std::collections::BTreeMap;

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{BagelPayError, Result};
use crate::models::{
    CheckoutRequest, CheckoutResponse, CreateProductRequest, CustomerListResponse, DataEnvelope,
    Pagination, Product, ProductListResponse, Subscription, SubscriptionListResponse,
    TransactionListResponse, UpdateProductRequest,
};
use crate::transport::{HttpClient, HttpRequest, ReqwestClient};

use super::response::parse_response;
use super::{ClientConfig, Mode, defaults};

/// Query parameters; entries with an empty value are not sent.
type Query = BTreeMap<&'static str, String>;

/// Client for the BagelPay REST API.
///
/// Each method issues exactly one HTTP request and returns either the
/// decoded record or one classified [`BagelPayError`]. Nothing is retried.
///
/// The client is immutable after construction and can be shared across
/// tasks; the underlying connection pool is reused by every call.
/// Dropping a returned future aborts the in-flight request, so deadlines
/// and cancellation compose with `tokio::time::timeout` and
/// `tokio::select!`.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use bagelpay::client::BagelPayClient;
/// use bagelpay::models::CheckoutRequest;
///
/// # async fn example() -> Result<(), bagelpay::BagelPayError> {
/// let client = BagelPayClient::test("bagel_test_...")?;
/// let checkout = client
///     .create_checkout(&CheckoutRequest::new("prod_123").with_customer_email("a@example.com"))
///     .await?;
/// println!("{:?}", checkout.checkout_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BagelPayClient<H = ReqwestClient> {
    http: H,
    base_url: String,
    api_key: HeaderValue,
}

impl BagelPayClient<ReqwestClient> {
    /// Creates a client backed by reqwest, honoring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns a local error if the API key is empty or not a valid header
    /// value, or if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = ReqwestClient::with_timeout(config.effective_timeout())
            .map_err(|e| BagelPayError::local_with("failed to build HTTP client", e))?;

        Self::with_http_client(config, http)
    }

    /// Creates a test-mode client with default settings.
    ///
    /// # Errors
    ///
    /// See [`BagelPayClient::new`].
    pub fn test(api_key: impl Into<String>) -> Result<Self> {
        Self::new(&ClientConfig::new(api_key).with_mode(Mode::Test))
    }

    /// Creates a live-mode client with default settings.
    ///
    /// # Errors
    ///
    /// See [`BagelPayClient::new`].
    pub fn live(api_key: impl Into<String>) -> Result<Self> {
        Self::new(&ClientConfig::new(api_key).with_mode(Mode::Live))
    }
}

impl<H: HttpClient> BagelPayClient<H> {
    /// Creates a client that sends requests through `http`.
    ///
    /// The configured timeout is not applied here; it is the caller's
    /// `http` client that decides how long a request may take.
    ///
    /// # Errors
    ///
    /// Returns a local error if the API key is empty or not a valid header
    /// value.
    pub fn with_http_client(config: &ClientConfig, http: H) -> Result<Self> {
        let key = config.api_key().trim();
        if key.is_empty() {
            return Err(BagelPayError::local("API key is required"));
        }

        let mut api_key = HeaderValue::from_str(key)
            .map_err(|e| BagelPayError::local_with("invalid API key", e))?;
        api_key.set_sensitive(true);

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            api_key,
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a checkout session.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure.
    pub async fn create_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse> {
        self.post_data(&["api", "payments", "checkouts"], Some(request))
            .await
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure.
    pub async fn create_product(&self, request: &CreateProductRequest) -> Result<Product> {
        self.post_data(&["api", "products", "create"], Some(request))
            .await
    }

    /// Fetches a product by id.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure; a local error if
    /// `product_id` is empty.
    pub async fn get_product(&self, product_id: &str) -> Result<Product> {
        let id = require_id("product id", product_id)?;
        self.get_data(&["api", "products", id]).await
    }

    /// Lists one page of products.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure.
    pub async fn list_products(&self, page: Pagination) -> Result<ProductListResponse> {
        self.get(&["api", "products", "list"], page.to_query())
            .await
    }

    /// Replaces the fields of an existing product.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure; a local error if
    /// the request's product id is empty.
    pub async fn update_product(&self, request: &UpdateProductRequest) -> Result<Product> {
        require_id("product id", &request.product_id)?;
        self.post_data(&["api", "products", "update"], Some(request))
            .await
    }

    /// Archives a product so it can no longer be sold.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure; a local error if
    /// `product_id` is empty.
    pub async fn archive_product(&self, product_id: &str) -> Result<Product> {
        let id = require_id("product id", product_id)?;
        self.post_data::<(), _>(&["api", "products", id, "archive"], None)
            .await
    }

    /// Restores an archived product.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure; a local error if
    /// `product_id` is empty.
    pub async fn unarchive_product(&self, product_id: &str) -> Result<Product> {
        let id = require_id("product id", product_id)?;
        self.post_data::<(), _>(&["api", "products", id, "unarchive"], None)
            .await
    }

    /// Lists one page of transactions.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure.
    pub async fn list_transactions(&self, page: Pagination) -> Result<TransactionListResponse> {
        self.get(&["api", "transactions", "list"], page.to_query())
            .await
    }

    /// Lists one page of subscriptions.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure.
    pub async fn list_subscriptions(&self, page: Pagination) -> Result<SubscriptionListResponse> {
        self.get(&["api", "subscriptions", "list"], page.to_query())
            .await
    }

    /// Fetches a subscription by id.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure; a local error if
    /// `subscription_id` is empty.
    pub async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        let id = require_id("subscription id", subscription_id)?;
        self.get_data(&["api", "subscriptions", id]).await
    }

    /// Cancels a subscription.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure; a local error if
    /// `subscription_id` is empty.
    pub async fn cancel_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        let id = require_id("subscription id", subscription_id)?;
        self.post_data::<(), _>(&["api", "subscriptions", id, "cancel"], None)
            .await
    }

    /// Lists one page of customers.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BagelPayError`] on failure.
    pub async fn list_customers(&self, page: Pagination) -> Result<CustomerListResponse> {
        self.get(&["api", "customers", "list"], page.to_query())
            .await
    }

    /// Builds the request URL: base URL, then `segments` (each percent-encoded
    /// as one path segment), then the non-empty query parameters.
    pub(crate) fn build_url(&self, segments: &[&str], query: &Query) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| BagelPayError::local_with("invalid URL", e))?;

        url.path_segments_mut()
            .map_err(|()| BagelPayError::local(format!("invalid URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        let mut params = query.iter().filter(|(_, value)| !value.is_empty()).peekable();
        if params.peek().is_some() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Builds the request with the SDK headers attached.
    pub(crate) fn build_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> HttpRequest {
        let request = HttpRequest::new(method, url)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(USER_AGENT, HeaderValue::from_static(defaults::USER_AGENT))
            .with_header(
                HeaderName::from_static(defaults::API_KEY_HEADER),
                self.api_key.clone(),
            );

        match body {
            Some(body) => request.with_body(body),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        tracing::debug!(method = %request.method, path = request.url.path(), "Sending BagelPay request");

        let response = self.http.request(request).await?;

        tracing::debug!(status = response.status.as_u16(), "Received BagelPay response");
        tracing::trace!(bytes = response.body.len(), "Response body buffered");

        parse_response(&response)
    }

    /// GET without body; the response is decoded as-is.
    async fn get<T: DeserializeOwned>(&self, segments: &[&str], query: Query) -> Result<T> {
        let url = self.build_url(segments, &query)?;
        self.execute(self.build_request(Method::GET, url, None))
            .await
    }

    /// GET of a singular endpoint; unwraps `{"data": ...}`.
    async fn get_data<T>(&self, segments: &[&str]) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let envelope: DataEnvelope<T> = self.get(segments, Query::new()).await?;
        Ok(envelope.data)
    }

    /// POST of a singular endpoint with an optional JSON body; unwraps
    /// `{"data": ...}`.
    async fn post_data<B, T>(&self, segments: &[&str], body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let url = self.build_url(segments, &Query::new())?;
        let body = body.map(encode).transpose()?;

        let envelope: DataEnvelope<T> = self
            .execute(self.build_request(Method::POST, url, body))
            .await?;
        Ok(envelope.data)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| BagelPayError::local_with("failed to marshal request data", e))
}

fn require_id<'a>(what: &str, id: &'a str) -> Result<&'a str> {
    if id.trim().is_empty() {
        return Err(BagelPayError::local(format!("{what} is required")));
    }
    Ok(id)
}
