//! Wire models for the BagelPay API.
//!
//! Response records wrap every field in `Option` and skip `None` when
//! serializing: a field the service did not send stays absent, it is never
//! defaulted to an empty string or zero. Request records only require their
//! identifying fields.
//!
//! Singular endpoints wrap their record in a [`DataEnvelope`]; list
//! endpoints return a [`ListResponse`].

mod checkout;
mod common;
mod customer;
mod product;
mod subscription;
mod transaction;

#[cfg(test)]
mod product_tests;
#[cfg(test)]
mod records_tests;

pub use checkout::{CheckoutCustomer, CheckoutRequest, CheckoutResponse, Metadata};
pub use common::{
    ApiErrorPayload, CustomerRef, DataEnvelope, ListResponse, Pagination, ParseValueError,
    from_json, to_json,
};
pub use customer::{CustomerData, CustomerListResponse};
pub use product::{
    BillingType, CreateProductRequest, Product, ProductListResponse, RecurringInterval,
    UpdateProductRequest,
};
pub use subscription::{Subscription, SubscriptionListResponse};
pub use transaction::{Transaction, TransactionListResponse};
