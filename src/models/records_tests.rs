//! Tests for subscription, customer and transaction records.

use serde_json::json;

use super::{
    CustomerListResponse, CustomerRef, RecurringInterval, Subscription, SubscriptionListResponse,
    Transaction, TransactionListResponse,
};

mod subscription {
    use super::*;

    #[test]
    fn parses_embedded_customer() {
        let sub: Subscription = serde_json::from_value(json!({
            "subscription_id": "sub_1",
            "status": "trialing",
            "customer": {"id": "cus_1", "email": "a@example.com"},
            "product_id": "prod_1",
            "product_name": "Pro",
            "amount": 29.99,
            "billing_period_start": "2026-10-01",
            "billing_period_end": "2026-11-01",
            "recurring_interval": "monthly"
        }))
        .unwrap();

        assert_eq!(
            sub.customer,
            Some(CustomerRef {
                id: Some("cus_1".to_string()),
                email: Some("a@example.com".to_string()),
            })
        );
        assert_eq!(sub.interval(), Some(RecurringInterval::Monthly));
        assert!(sub.cancel_at.is_none());
        assert!(!sub.is_canceled());
    }

    #[test]
    fn canceled_status() {
        let sub: Subscription =
            serde_json::from_value(json!({"status": "canceled", "cancel_at": "2026-11-01"}))
                .unwrap();

        assert!(sub.is_canceled());
        assert_eq!(sub.cancel_at.as_deref(), Some("2026-11-01"));
    }

    #[test]
    fn empty_list() {
        let page: SubscriptionListResponse =
            serde_json::from_value(json!({"total": 0, "items": [], "code": 200, "msg": "success"}))
                .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}

mod customer {
    use super::*;

    #[test]
    fn parses_counters() {
        let page: CustomerListResponse = serde_json::from_value(json!({
            "total": 1,
            "items": [{
                "id": 42,
                "email": "a@example.com",
                "subscriptions": 2,
                "payments": 5,
                "total_spend": 120.5
            }]
        }))
        .unwrap();

        let customer = &page.items[0];
        assert_eq!(customer.id, Some(42));
        assert_eq!(customer.name, None);
        assert_eq!(customer.subscriptions, Some(2));
        assert_eq!(customer.payments, Some(5));
        assert_eq!(customer.total_spend, Some(120.5));
    }
}

mod transaction {
    use super::*;

    #[test]
    fn type_field_is_renamed() {
        let tx: Transaction = serde_json::from_value(json!({
            "transaction_id": "tx_1",
            "type": "refund",
            "amount": 10.0,
            "refunded_amount": 10.0
        }))
        .unwrap();

        assert_eq!(tx.transaction_type.as_deref(), Some("refund"));

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "refund");
        assert!(value.get("transaction_type").is_none());
    }

    #[test]
    fn round_trip_preserves_present_fields_only() {
        let original = json!({
            "transaction_id": "tx_2",
            "amount": 100.0,
            "amount_paid": 100.0,
            "tax_amount": 8.0,
            "fees": 3.2,
            "net": 88.8,
            "currency": "USD",
            "customer": {"email": "b@example.com"}
        });
        let tx: Transaction = serde_json::from_value(original.clone()).unwrap();

        assert_eq!(serde_json::to_value(&tx).unwrap(), original);
    }

    #[test]
    fn list_parses() {
        let page: TransactionListResponse = serde_json::from_value(json!({
            "total": 40,
            "items": [{"transaction_id": "a"}, {"transaction_id": "b"}]
        }))
        .unwrap();

        assert_eq!(page.total, 40);
        assert_eq!(page.len(), 2);
    }
}
