//! Test doubles for the transport used by the API client tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use http::StatusCode;
use serde_json::json;

use crate::client::{BagelPayClient, ClientConfig};
use crate::models::{CreateProductRequest, Product};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub const TEST_KEY: &str = "bagel_test_fixture_key";

/// Mock HTTP client that replays a queue of canned results and records
/// every request it receives.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// A client answering once with `status` and a JSON body.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::raw(status, &body.to_string())
    }

    /// A client answering once with `status` and a raw body.
    pub fn raw(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::with_status(
            StatusCode::from_u16(status).unwrap(),
            body,
        ))])
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.captured_requests()
            .pop()
            .expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

/// Client whose requests never complete; records whether the in-flight
/// future was dropped.
#[derive(Debug, Default)]
pub struct PendingClient {
    pub started: AtomicBool,
    pub dropped: AtomicBool,
}

struct DropFlag<'a>(&'a AtomicBool);

impl Drop for DropFlag<'_> {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl HttpClient for PendingClient {
    async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.started.store(true, Ordering::SeqCst);
        let _flag = DropFlag(&self.dropped);
        std::future::pending().await
    }
}

/// In-memory stand-in for the product catalog endpoints.
///
/// Handles `products/create` and `products/list`; every other path
/// answers 404 with a structured error payload.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    products: Mutex<Vec<Product>>,
}

impl FakeCatalog {
    fn create(&self, req: &HttpRequest) -> HttpResponse {
        let Some(body) = req.body.as_deref() else {
            return Self::error(400, "body is required");
        };
        let Ok(draft) = serde_json::from_slice::<CreateProductRequest>(body) else {
            return Self::error(400, "invalid product");
        };

        let mut products = self.products.lock().unwrap();
        let product = Product {
            product_id: Some(format!("prod_{}", products.len() + 1)),
            name: Some(draft.name),
            price: Some(draft.price),
            currency: Some(draft.currency),
            billing_type: Some(draft.billing_type.to_string()),
            recurring_interval: draft.recurring_interval.map(|i| i.to_string()),
            trial_days: draft.trial_days.map(i64::from),
            is_archive: Some(false),
            ..Product::default()
        };
        products.push(product.clone());

        HttpResponse::with_status(StatusCode::OK, json!({ "data": product }).to_string())
    }

    fn list(&self, req: &HttpRequest) -> HttpResponse {
        let param = |name: &str| {
            req.url
                .query_pairs()
                .find(|(k, _)| k == name)
                .and_then(|(_, v)| v.parse::<usize>().ok())
        };
        let page_num = param("pageNum").unwrap_or(1).max(1);
        let page_size = param("pageSize").unwrap_or(10);

        let products = self.products.lock().unwrap();
        let items: Vec<_> = products
            .iter()
            .rev()
            .skip((page_num - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();

        HttpResponse::with_status(
            StatusCode::OK,
            json!({ "total": products.len(), "items": items, "code": 200, "msg": "success" })
                .to_string(),
        )
    }

    fn error(status: u16, message: &str) -> HttpResponse {
        HttpResponse::with_status(
            StatusCode::from_u16(status).unwrap(),
            json!({ "code": status, "message": message }).to_string(),
        )
    }
}

impl HttpClient for FakeCatalog {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = match (req.method.as_str(), req.url.path()) {
            ("POST", "/api/products/create") => self.create(&req),
            ("GET", "/api/products/list") => self.list(&req),
            _ => Self::error(404, "not found"),
        };
        Ok(response)
    }
}

/// Builds a test-mode client around `http`.
pub fn client_with<H: HttpClient>(http: H) -> BagelPayClient<H> {
    BagelPayClient::with_http_client(&ClientConfig::new(TEST_KEY), http).unwrap()
}
