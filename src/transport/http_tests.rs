//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://test.bagelpay.io/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_and_post_set_method() {
        let url = url::Url::parse("https://test.bagelpay.io/").unwrap();

        assert_eq!(HttpRequest::get(url.clone()).method, http::Method::GET);
        assert_eq!(HttpRequest::post(url).method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://test.bagelpay.io/").unwrap();
        let req = HttpRequest::post(url).with_body(b"{\"a\":1}".to_vec());

        assert_eq!(req.body_text(), Some("{\"a\":1}"));
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let url = url::Url::parse("https://test.bagelpay.io/").unwrap();
        let req = HttpRequest::get(url)
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("first"),
            )
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("second"),
            );

        assert_eq!(req.headers.get_all(http::header::USER_AGENT).iter().count(), 1);
        assert_eq!(req.headers.get(http::header::USER_AGENT).unwrap(), "second");
    }

    #[test]
    fn body_text_is_none_without_body() {
        let url = url::Url::parse("https://test.bagelpay.io/").unwrap();

        assert!(HttpRequest::get(url).body_text().is_none());
    }
}

mod http_response {
    use super::*;

    #[test]
    fn success_covers_everything_below_400() {
        for code in [200, 201, 204, 302, 399] {
            let status = http::StatusCode::from_u16(code).unwrap();
            assert!(HttpResponse::with_status(status, "").is_success(), "{code}");
        }
    }

    #[test]
    fn failure_starts_at_400() {
        for code in [400, 401, 404, 429, 500, 503] {
            let status = http::StatusCode::from_u16(code).unwrap();
            assert!(!HttpResponse::with_status(status, "").is_success(), "{code}");
        }
    }

    #[test]
    fn body_lossy_replaces_invalid_utf8() {
        let resp = HttpResponse::with_status(http::StatusCode::OK, vec![b'o', b'k', 0xFF]);

        assert_eq!(resp.body_lossy(), "ok\u{FFFD}");
    }
}
