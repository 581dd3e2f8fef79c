//! Tests for the error taxonomy.

use super::*;

fn payload(code: i64, message: &str) -> ApiErrorPayload {
    ApiErrorPayload {
        code,
        message: message.to_string(),
        details: None,
    }
}

mod kind {
    use super::*;

    #[test]
    fn from_status_follows_the_mapping_table() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Authentication);
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimit);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(599), ApiErrorKind::Server);
    }

    #[test]
    fn unlisted_client_errors_are_other() {
        for status in [402, 403, 405, 409, 410, 418, 422, 499] {
            assert_eq!(ApiErrorKind::from_status(status), ApiErrorKind::Other, "{status}");
        }
    }

    #[test]
    fn default_statuses() {
        let cases = [
            (ApiErrorKind::Authentication, Some(401)),
            (ApiErrorKind::Validation, Some(400)),
            (ApiErrorKind::NotFound, Some(404)),
            (ApiErrorKind::RateLimit, Some(429)),
            (ApiErrorKind::Server, Some(500)),
            (ApiErrorKind::Other, None),
        ];

        for (kind, expected) in cases {
            assert_eq!(kind.default_status().map(|s| s.as_u16()), expected, "{kind:?}");
        }
    }
}

mod api_error {
    use super::*;

    #[test]
    fn new_uses_default_status() {
        let err = ApiError::new(ApiErrorKind::NotFound, "missing");

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.error_code(), "");
        assert!(err.payload().is_none());
    }

    #[test]
    fn explicit_status_overrides_default() {
        let err = ApiError::new(ApiErrorKind::Server, "down").with_status(StatusCode::BAD_GATEWAY);

        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.kind(), ApiErrorKind::Server);
    }

    #[test]
    fn from_response_stringifies_code() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, payload(40101, "bad key"));

        assert_eq!(err.kind(), ApiErrorKind::Authentication);
        assert_eq!(err.error_code(), "40101");
        assert_eq!(err.message(), "bad key");
        assert_eq!(err.payload().map(|p| p.code), Some(40101));
    }

    #[test]
    fn from_response_with_zero_code_has_empty_error_code() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, payload(0, "bad input"));

        assert_eq!(err.error_code(), "");
    }

    #[test]
    fn display_uses_kind_prefix() {
        let err = ApiError::new(ApiErrorKind::Validation, "name is required");

        assert_eq!(err.to_string(), "BagelPay validation error: name is required");
    }

    #[test]
    fn other_kind_display_includes_status() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, payload(403, "forbidden"));

        assert_eq!(err.to_string(), "BagelPay API error (status 403): forbidden");
    }

    #[test]
    fn summary_joins_present_fields() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, payload(404, "no such product"));

        assert_eq!(err.summary(), "no such product | Status: 404 | Code: 404");
    }

    #[test]
    fn summary_omits_missing_fields() {
        let err = ApiError::new(ApiErrorKind::Other, "odd failure");

        assert_eq!(err.summary(), "odd failure");
    }

    #[test]
    fn with_source_is_exposed() {
        let io = std::io::Error::other("inner");
        let err = ApiError::new(ApiErrorKind::Server, "outer").with_source(io);

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "inner");
    }
}

mod bagelpay_error {
    use super::*;

    #[test]
    fn local_display_includes_cause() {
        let io = std::io::Error::other("dns failure");
        let err = BagelPayError::local_with("request failed", io);

        assert_eq!(
            err.to_string(),
            "BagelPay error: request failed (caused by: dns failure)"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn local_without_cause() {
        let err = BagelPayError::local("API key is required");

        assert_eq!(err.to_string(), "BagelPay error: API key is required");
        assert!(std::error::Error::source(&err).is_none());
        assert!(!err.is_api_error());
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn http_error_converts_to_local() {
        let err = BagelPayError::from(HttpError::Timeout);

        assert!(matches!(err, BagelPayError::Local { .. }));
        assert_eq!(err.message(), "request failed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Request timed out");
    }

    #[test]
    fn predicates_are_exclusive() {
        let kinds = [
            ApiErrorKind::Authentication,
            ApiErrorKind::Validation,
            ApiErrorKind::NotFound,
            ApiErrorKind::RateLimit,
            ApiErrorKind::Server,
            ApiErrorKind::Other,
        ];

        for kind in kinds {
            let err = BagelPayError::from(ApiError::new(kind, "x"));
            let flags = [
                err.is_authentication_error(),
                err.is_validation_error(),
                err.is_not_found_error(),
                err.is_rate_limit_error(),
                err.is_server_error(),
            ];

            let expected = usize::from(kind != ApiErrorKind::Other);
            assert_eq!(flags.iter().filter(|f| **f).count(), expected, "{kind:?}");
            assert!(err.is_api_error());
        }
    }

    #[test]
    fn api_display_is_transparent() {
        let err = BagelPayError::from(ApiError::new(ApiErrorKind::RateLimit, "slow down"));

        assert_eq!(err.to_string(), "BagelPay rate limit error: slow down");
        assert_eq!(err.summary(), "slow down | Status: 429");
    }
}
