//! Tests for response decoding and failure classification.

use http::StatusCode;

use super::{classify_failure, parse_response};
use crate::ApiErrorKind;
use crate::models::{DataEnvelope, Product, SubscriptionListResponse};
use crate::transport::HttpResponse;

fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::with_status(StatusCode::from_u16(status).unwrap(), body)
}

mod classification {
    use super::*;

    #[test]
    fn every_error_status_maps_to_its_kind() {
        for status in 400..600 {
            let err = classify_failure(&response(status, r#"{"code": 1, "message": "m"}"#));
            let expected = match status {
                400 => ApiErrorKind::Validation,
                401 => ApiErrorKind::Authentication,
                404 => ApiErrorKind::NotFound,
                429 => ApiErrorKind::RateLimit,
                500.. => ApiErrorKind::Server,
                _ => ApiErrorKind::Other,
            };

            assert_eq!(err.kind(), expected, "status {status}");
            assert_eq!(err.status_code(), Some(status));
        }
    }

    #[test]
    fn not_found_is_never_generic() {
        let err = classify_failure(&response(404, "not json"));

        assert_eq!(err.kind(), ApiErrorKind::NotFound);
    }

    #[test]
    fn structured_payload_is_kept() {
        let err = classify_failure(&response(
            400,
            r#"{"code": 10001, "message": "price is required", "details": "price"}"#,
        ));

        assert_eq!(err.message(), "price is required");
        assert_eq!(err.error_code(), "10001");
        assert_eq!(err.payload().and_then(|p| p.details.as_deref()), Some("price"));
    }

    #[test]
    fn unparsable_body_falls_back_to_raw_text() {
        let err = classify_failure(&response(500, "upstream exploded"));

        assert_eq!(err.kind(), ApiErrorKind::Server);
        assert_eq!(err.message(), "HTTP 500: upstream exploded");
        assert_eq!(err.error_code(), "500");
        assert_eq!(err.payload().map(|p| p.code), Some(500));
    }

    #[test]
    fn empty_body_falls_back() {
        let err = classify_failure(&response(429, ""));

        assert_eq!(err.kind(), ApiErrorKind::RateLimit);
        assert_eq!(err.message(), "HTTP 429: ");
    }
}

mod decoding {
    use super::*;

    #[test]
    fn success_decodes_body() {
        let envelope: DataEnvelope<Product> =
            parse_response(&response(200, r#"{"data": {"product_id": "p1"}}"#)).unwrap();

        assert_eq!(envelope.data.product_id.as_deref(), Some("p1"));
    }

    #[test]
    fn status_below_400_is_success() {
        let page: SubscriptionListResponse =
            parse_response(&response(202, r#"{"total": 0, "items": []}"#)).unwrap();

        assert!(page.items.is_empty());
    }

    #[test]
    fn malformed_success_body_is_local_error() {
        let err = parse_response::<DataEnvelope<Product>>(&response(200, "<html>")).unwrap_err();

        assert!(!err.is_api_error());
        assert_eq!(err.message(), "failed to parse response");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn failure_status_is_api_error() {
        let err = parse_response::<DataEnvelope<Product>>(&response(
            401,
            r#"{"code":401,"message":"invalid api key"}"#,
        ))
        .unwrap_err();

        assert!(err.is_authentication_error());
        assert!(err.to_string().contains("invalid api key"));
    }
}
