//! Order return resource.
//!
//! An order return records items returned from an order and the refund
//! issued for them. Returns are created through the order they belong to,
//! so this module only lists them.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::ListIterator;
//! use stripe_api::rest::resources::OrderReturnListParams;
//!
//! let params = OrderReturnListParams {
//!     order: Some("or_123".to_string()),
//!     ..Default::default()
//! };
//! let mut iter = client.order_returns().list(Some(&params));
//! while iter.next().await {
//!     let ret = iter.order_return().unwrap();
//!     println!("{:?} refunded {}", ret.id, ret.amount);
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Backend, Error, HttpBackend, HttpMethod};
use crate::config::ApiKey;
use crate::params::{DateFilter, ListParams, ListParamsContainer};
use crate::rest::list::{paged_query, ListIter, ListIterator, ListMeta};
use crate::rest::resources::common::expandable_id;
use crate::rest::{Resource, ResourceOperation, ResourcePath};

/// Items returned from an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderReturn {
    /// The unique identifier, e.g. `orret_1234`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Always `"order_return"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Total refunded amount in the smallest currency unit.
    #[serde(default)]
    pub amount: i64,

    /// When the return was created.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    /// Three-letter ISO currency code, lowercase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The returned items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,

    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,

    /// The order the items were returned from.
    #[serde(
        default,
        deserialize_with = "expandable_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<String>,

    /// The refund issued for the return.
    #[serde(
        default,
        deserialize_with = "expandable_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub refund: Option<String>,
}

impl Resource for OrderReturn {
    const OBJECT: &'static str = "order_return";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::List,
        "/order_returns",
    )];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// The kind of an order line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderItemType {
    /// A stock keeping unit.
    Sku,
    /// Tax.
    Tax,
    /// Shipping cost.
    Shipping,
    /// A discount.
    Discount,
    /// A type this crate does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A line of an order or order return.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderItem {
    /// Always `"order_item"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Line amount in the smallest currency unit.
    #[serde(default)]
    pub amount: i64,

    /// Three-letter ISO currency code, lowercase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Human-readable description of the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The SKU, discount code or similar the line refers to.
    #[serde(
        default,
        deserialize_with = "expandable_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,

    /// Number of units, for SKU lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The kind of line.
    #[serde(rename = "type", default)]
    pub item_type: OrderItemType,
}

/// Parameters for listing order returns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderReturnListParams {
    /// Filter on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateFilter>,
    /// Only returns of this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub list_params: ListParams,
}

impl ListParamsContainer for OrderReturnListParams {
    fn list_params(&self) -> &ListParams {
        &self.list_params
    }
}

/// Client for the `/order_returns` endpoints.
pub struct Client<B: Backend = HttpBackend> {
    backend: Arc<B>,
    key: ApiKey,
}

impl<B: Backend> Clone for Client<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
        }
    }
}

impl<B: Backend> fmt::Debug for Client<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("order_return::Client")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl<B: Backend> Client<B> {
    /// Creates a client that sends requests through `backend` with `key`.
    #[must_use]
    pub const fn new(backend: Arc<B>, key: ApiKey) -> Self {
        Self { backend, key }
    }

    /// Lists order returns as a lazy iterator.
    #[must_use]
    pub fn list(&self, params: Option<&OrderReturnListParams>) -> Iter {
        let query = paged_query(Arc::clone(&self.backend), self.key.clone());
        let inner = match params {
            Some(params) => ListIter::new(params, query),
            None => ListIter::new(&OrderReturnListParams::default(), query),
        };
        Iter { inner }
    }
}

/// Iterator over order returns returned by [`Client::list`].
#[derive(Debug)]
pub struct Iter {
    inner: ListIter<OrderReturn>,
}

impl Iter {
    /// Returns the order return the last successful advance moved to.
    #[must_use]
    pub fn order_return(&self) -> Option<&OrderReturn> {
        self.inner.current()
    }

    /// Drains the iterator into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped iteration.
    pub async fn collect_all(self) -> Result<Vec<OrderReturn>, Error> {
        self.inner.collect_all().await
    }
}

impl ListIterator for Iter {
    type Item = OrderReturn;

    async fn next(&mut self) -> bool {
        self.inner.next().await
    }

    fn current(&self) -> Option<&OrderReturn> {
        self.inner.current()
    }

    fn err(&self) -> Option<&Error> {
        self.inner.err()
    }

    fn meta(&self) -> Option<&ListMeta> {
        self.inner.meta()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RangeQueryParams;
    use crate::rest::resources::testing::{test_key, StubBackend};

    #[test]
    fn test_order_return_deserialization() {
        let json = r#"{
            "id": "orret_1",
            "object": "order_return",
            "amount": 1500,
            "created": 1516000000,
            "currency": "usd",
            "items": [
                {"object": "order_item", "amount": 1500, "currency": "usd",
                 "description": "T-shirt", "parent": "sku_1", "quantity": 1, "type": "sku"},
                {"object": "order_item", "amount": 0, "currency": "usd",
                 "description": "Free shipping", "parent": null, "type": "shipping"},
                {"object": "order_item", "amount": 0, "type": "gift_wrap"}
            ],
            "livemode": false,
            "order": {"id": "or_1", "object": "order"},
            "refund": "re_1"
        }"#;

        let ret: OrderReturn = serde_json::from_str(json).unwrap();
        assert_eq!(ret.id.as_deref(), Some("orret_1"));
        assert_eq!(ret.amount, 1500);
        assert_eq!(ret.created.map(|c| c.timestamp()), Some(1_516_000_000));
        assert_eq!(ret.items.len(), 3);
        assert_eq!(ret.items[0].item_type, OrderItemType::Sku);
        assert_eq!(ret.items[0].parent.as_deref(), Some("sku_1"));
        assert_eq!(ret.items[1].item_type, OrderItemType::Shipping);
        assert_eq!(ret.items[2].item_type, OrderItemType::Unknown);
        assert_eq!(ret.order.as_deref(), Some("or_1"));
        assert_eq!(ret.refund.as_deref(), Some("re_1"));
    }

    #[test]
    fn test_order_return_serialization_keeps_every_field() {
        let source = serde_json::json!({
            "id": "orret_2",
            "object": "order_return",
            "amount": 1800,
            "created": 1516000000,
            "currency": "usd",
            "items": [
                {"object": "order_item", "amount": 1500, "currency": "usd",
                 "description": "T-shirt", "parent": "sku_1", "quantity": 2, "type": "sku"},
                {"object": "order_item", "amount": 120, "currency": "usd",
                 "description": "Sales tax", "type": "tax"},
                {"object": "order_item", "amount": 400, "currency": "usd",
                 "description": "Ground shipping", "parent": "ship_1", "type": "shipping"},
                {"object": "order_item", "amount": -220, "currency": "usd",
                 "description": "Spring sale", "parent": "SPRING", "type": "discount"}
            ],
            "livemode": true,
            "order": "or_2",
            "refund": "re_2"
        });

        let ret: OrderReturn = serde_json::from_value(source.clone()).unwrap();
        let types: Vec<_> = ret.items.iter().map(|i| i.item_type).collect();
        assert_eq!(
            types,
            vec![
                OrderItemType::Sku,
                OrderItemType::Tax,
                OrderItemType::Shipping,
                OrderItemType::Discount
            ]
        );

        let encoded = serde_json::to_value(&ret).unwrap();
        assert_eq!(encoded, source);

        let decoded: OrderReturn = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, ret);
    }

    #[tokio::test]
    async fn test_list_filters_and_pages() {
        let backend = Arc::new(StubBackend::with_responses(&[
            (
                200,
                r#"{"object":"list","has_more":true,"data":[{"id":"orret_1"}]}"#,
            ),
            (
                200,
                r#"{"object":"list","has_more":false,"data":[{"id":"orret_2"}]}"#,
            ),
        ]));
        let client = Client::new(Arc::clone(&backend), test_key());
        let params = OrderReturnListParams {
            order: Some("or_1".to_string()),
            created: Some(
                RangeQueryParams {
                    gte: Some(1_500_000_000),
                    ..Default::default()
                }
                .into(),
            ),
            ..Default::default()
        };

        let mut iter = client.list(Some(&params));
        assert_eq!(backend.request_count(), 0);

        assert!(iter.next().await);
        assert_eq!(iter.order_return().and_then(|r| r.id.as_deref()), Some("orret_1"));
        assert!(iter.next().await);
        assert_eq!(iter.order_return().and_then(|r| r.id.as_deref()), Some("orret_2"));
        assert!(!iter.next().await);
        assert!(iter.order_return().is_none());

        let first = backend.request(0);
        assert_eq!(first.http_method, HttpMethod::Get);
        assert_eq!(first.path, "/order_returns");
        assert_eq!(first.form.get("order"), Some("or_1"));
        assert_eq!(first.form.get("created[gte]"), Some("1500000000"));
        assert_eq!(backend.request(1).form.get("starting_after"), Some("orret_1"));
    }

    #[tokio::test]
    async fn test_list_error_is_exposed() {
        let backend = Arc::new(StubBackend::with_responses(&[(
            401,
            r#"{"error":{"type":"authentication_error","message":"Invalid API Key provided"}}"#,
        )]));
        let client = Client::new(backend, test_key());

        let mut iter = client.list(None);
        assert!(!iter.next().await);
        assert_eq!(iter.err().and_then(Error::http_status), Some(401));
    }
}
