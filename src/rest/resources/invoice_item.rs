//! Invoice item resource.
//!
//! Invoice items are charges (or credits) added to a customer's next invoice,
//! or to a specific draft invoice.
//!
//! # Operations
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | [`Client::create`] | POST | `/invoiceitems` |
//! | [`Client::get`] | GET | `/invoiceitems/{id}` |
//! | [`Client::update`] | POST | `/invoiceitems/{id}` |
//! | [`Client::delete`] | DELETE | `/invoiceitems/{id}` |
//! | [`Client::list`] | GET | `/invoiceitems` |
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{ListIterator, StripeClient};
//! use stripe_api::rest::resources::InvoiceItemParams;
//!
//! let items = client.invoice_items();
//!
//! let params = InvoiceItemParams {
//!     customer: Some("cus_123".to_string()),
//!     amount: Some(1000),
//!     currency: Some("usd".to_string()),
//!     ..Default::default()
//! };
//! let item = items.create(Some(&params)).await?;
//!
//! let deleted = items.delete(item.id.as_deref().unwrap(), None).await?;
//! assert!(deleted.deleted);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Backend, Error, HttpBackend, HttpMethod};
use crate::config::ApiKey;
use crate::params::{DateFilter, ListParams, ListParamsContainer, Params, ParamsContainer};
use crate::rest::list::{paged_query, ListIter, ListIterator, ListMeta};
use crate::rest::resources::common::expandable_id;
use crate::rest::{format_url_path, Resource, ResourceOperation, ResourcePath};

/// A charge or credit waiting to be billed on an invoice.
///
/// Every field is optional or defaulted: a delete confirmation, for
/// instance, only carries `id`, `object` and `deleted`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InvoiceItem {
    /// The unique identifier, e.g. `ii_1234`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Always `"invoiceitem"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Amount in the smallest currency unit. Negative for credits.
    #[serde(default)]
    pub amount: i64,

    /// Three-letter ISO currency code, lowercase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The customer to be billed.
    #[serde(
        default,
        deserialize_with = "expandable_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer: Option<String>,

    /// When the item was created.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,

    /// Set on delete confirmations.
    #[serde(default)]
    pub deleted: bool,

    /// Shown on the invoice next to the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether discounts apply to this item.
    #[serde(default)]
    pub discountable: bool,

    /// The invoice this item is attached to, if already invoiced.
    #[serde(
        default,
        deserialize_with = "expandable_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice: Option<String>,

    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,

    /// Key/value metadata.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    /// The billing period the item covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Whether the item comes from a subscription proration.
    #[serde(default)]
    pub proration: bool,

    /// Quantity of units.
    #[serde(default)]
    pub quantity: i64,

    /// The subscription that created this item, if any.
    #[serde(
        default,
        deserialize_with = "expandable_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription: Option<String>,

    /// The subscription item that created this item, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_item: Option<String>,

    /// Price per unit in the smallest currency unit.
    #[serde(default)]
    pub unit_amount: i64,
}

/// Start and end of a billing period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Period {
    /// Start of the period.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,
    /// End of the period.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: DateTime<Utc>,
}

impl Resource for InvoiceItem {
    const OBJECT: &'static str = "invoiceitem";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "/invoiceitems"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Retrieve,
            "/invoiceitems/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Update,
            "/invoiceitems/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            "/invoiceitems/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "/invoiceitems"),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Parameters for create, get, update and delete.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceItemParams {
    /// Amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Three-letter ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The customer to bill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Shown on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether discounts apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discountable: Option<bool>,
    /// A draft invoice to add the item to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,
    /// Quantity of units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// A subscription whose next invoice gets the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    /// Common parameters (expand, metadata, connected account).
    #[serde(flatten)]
    pub params: Params,
}

impl ParamsContainer for InvoiceItemParams {
    fn params(&self) -> &Params {
        &self.params
    }
}

/// Parameters for listing invoice items.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceItemListParams {
    /// Filter on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateFilter>,
    /// Only items for this customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Only items on this invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,
    /// Only items not yet attached to an invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    /// Pagination.
    #[serde(flatten)]
    pub list_params: ListParams,
}

impl ListParamsContainer for InvoiceItemListParams {
    fn list_params(&self) -> &ListParams {
        &self.list_params
    }
}

/// Client for the `/invoiceitems` endpoints.
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
        f.debug_struct("invoice_item::Client")
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

    /// Creates an invoice item.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged.
    pub async fn create(&self, params: Option<&InvoiceItemParams>) -> Result<InvoiceItem, Error> {
        let path = InvoiceItem::path(ResourceOperation::Create)?;
        self.backend
            .call(path.http_method, path.template, &self.key, params)
            .await
    }

    /// Retrieves an invoice item by id.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged, e.g. [`Error::Api`] with a 404
    /// status for an unknown id.
    pub async fn get(
        &self,
        id: &str,
        params: Option<&InvoiceItemParams>,
    ) -> Result<InvoiceItem, Error> {
        let op = InvoiceItem::path(ResourceOperation::Retrieve)?;
        let path = format_url_path(op.template, &[id]);
        self.backend
            .call(op.http_method, &path, &self.key, params)
            .await
    }

    /// Updates an invoice item. Only the fields set in `params` change.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged.
    pub async fn update(
        &self,
        id: &str,
        params: Option<&InvoiceItemParams>,
    ) -> Result<InvoiceItem, Error> {
        let op = InvoiceItem::path(ResourceOperation::Update)?;
        let path = format_url_path(op.template, &[id]);
        self.backend
            .call(op.http_method, &path, &self.key, params)
            .await
    }

    /// Deletes an invoice item that is not yet attached to a paid invoice.
    ///
    /// Returns the confirmation object, normally `{id, object, deleted: true}`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged.
    pub async fn delete(
        &self,
        id: &str,
        params: Option<&InvoiceItemParams>,
    ) -> Result<InvoiceItem, Error> {
        let op = InvoiceItem::path(ResourceOperation::Delete)?;
        let path = format_url_path(op.template, &[id]);
        self.backend
            .call(op.http_method, &path, &self.key, params)
            .await
    }

    /// Lists invoice items, newest first, as a lazy iterator.
    ///
    /// No request is sent until the first [`ListIterator::next`].
    #[must_use]
    pub fn list(&self, params: Option<&InvoiceItemListParams>) -> Iter {
        let query = paged_query(Arc::clone(&self.backend), self.key.clone());
        let inner = match params {
            Some(params) => ListIter::new(params, query),
            None => ListIter::new(&InvoiceItemListParams::default(), query),
        };
        Iter { inner }
    }
}

/// Iterator over invoice items returned by [`Client::list`].
#[derive(Debug)]
pub struct Iter {
    inner: ListIter<InvoiceItem>,
}

impl Iter {
    /// Returns the invoice item the last successful advance moved to.
    #[must_use]
    pub fn invoice_item(&self) -> Option<&InvoiceItem> {
        self.inner.current()
    }

    /// Drains the iterator into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped iteration.
    pub async fn collect_all(self) -> Result<Vec<InvoiceItem>, Error> {
        self.inner.collect_all().await
    }
}

impl ListIterator for Iter {
    type Item = InvoiceItem;

    async fn next(&mut self) -> bool {
        self.inner.next().await
    }

    fn current(&self) -> Option<&InvoiceItem> {
        self.inner.current()
    }

    fn err(&self) -> Option<&Error> {
        self.inner.err()
    }

    fn meta(&self) -> Option<&ListMeta> {
        self.inner.meta()
    }
}
