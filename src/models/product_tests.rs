//! Tests for product models.

use super::{BillingType, CreateProductRequest, Product, RecurringInterval, UpdateProductRequest};

mod enums {
    use super::*;

    #[test]
    fn billing_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&BillingType::SinglePayment).unwrap(),
            r#""single_payment""#
        );
        assert_eq!(
            serde_json::to_string(&BillingType::Subscription).unwrap(),
            r#""subscription""#
        );
    }

    #[test]
    fn recurring_interval_wire_names() {
        let cases = [
            (RecurringInterval::Daily, "daily"),
            (RecurringInterval::Weekly, "weekly"),
            (RecurringInterval::Monthly, "monthly"),
            (RecurringInterval::ThreeMonths, "3months"),
            (RecurringInterval::SixMonths, "6months"),
        ];

        for (interval, name) in cases {
            assert_eq!(serde_json::to_string(&interval).unwrap(), format!("\"{name}\""));
            assert_eq!(interval.to_string(), name);
            assert_eq!(name.parse::<RecurringInterval>().unwrap(), interval);
        }
    }

    #[test]
    fn unknown_interval_is_rejected() {
        let err = "yearly".parse::<RecurringInterval>().unwrap_err();

        assert_eq!(err.field, "recurring_interval");
        assert_eq!(err.to_string(), "Unknown recurring_interval value 'yearly'");
    }

    #[test]
    fn billing_type_parses() {
        assert_eq!("subscription".parse::<BillingType>().unwrap(), BillingType::Subscription);
        assert!("".parse::<BillingType>().is_err());
    }
}

mod create_request {
    use super::*;

    #[test]
    fn subscription_serializes_interval_and_trial() {
        let request =
            CreateProductRequest::subscription("Pro", 29.99, "USD", RecurringInterval::Monthly)
                .with_trial_days(7);
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();

        assert_eq!(json["billing_type"], "subscription");
        assert_eq!(json["recurring_interval"], "monthly");
        assert_eq!(json["trial_days"], 7);
        assert_eq!(json["price"], 29.99);
    }

    #[test]
    fn single_payment_omits_recurring_fields() {
        let request = CreateProductRequest::single_payment("E-book", 9.5, "USD")
            .with_description("A book")
            .with_tax_category("digital-products")
            .with_tax_inclusive(false);
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();

        assert_eq!(json["billing_type"], "single_payment");
        assert!(json.get("recurring_interval").is_none());
        assert!(json.get("trial_days").is_none());
        assert_eq!(json["tax_inclusive"], false);
        assert_eq!(json["description"], "A book");
    }

    #[test]
    fn update_request_flattens_fields() {
        let request = UpdateProductRequest::new(
            "prod_1",
            CreateProductRequest::single_payment("Renamed", 5.0, "EUR"),
        );
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();

        assert_eq!(json["product_id"], "prod_1");
        assert_eq!(json["name"], "Renamed");
        assert_eq!(json["currency"], "EUR");
        assert!(json.get("product").is_none());
    }

    #[test]
    fn update_request_round_trips() {
        let request = UpdateProductRequest::new(
            "prod_1",
            CreateProductRequest::subscription("Pro", 10.0, "USD", RecurringInterval::Weekly)
                .with_trial_days(3),
        );
        let json = serde_json::to_string(&request).unwrap();
        let parsed: UpdateProductRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, request);
    }
}

mod product {
    use super::*;

    #[test]
    fn typed_accessors() {
        let product: Product = serde_json::from_str(
            r#"{"product_id": "p1", "billing_type": "subscription", "recurring_interval": "3months"}"#,
        )
        .unwrap();

        assert_eq!(product.billing(), Some(BillingType::Subscription));
        assert_eq!(product.interval(), Some(RecurringInterval::ThreeMonths));
    }

    #[test]
    fn empty_interval_is_not_an_error() {
        let product: Product = serde_json::from_str(
            r#"{"billing_type": "single_payment", "recurring_interval": "", "trial_days": 0}"#,
        )
        .unwrap();

        assert_eq!(product.recurring_interval.as_deref(), Some(""));
        assert_eq!(product.interval(), None);
        assert_eq!(product.trial_days, Some(0));
    }

    #[test]
    fn round_trip_keeps_absent_fields_absent() {
        let json = r#"{"product_id":"p1","price":0.0,"is_archive":false}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.price, Some(0.0));
        assert_eq!(product.is_archive, Some(false));
        assert!(product.name.is_none());

        let reparsed: Product =
            serde_json::from_str(&serde_json::to_string(&product).unwrap()).unwrap();
        assert_eq!(reparsed, product);
        assert!(reparsed.name.is_none());
    }
}
