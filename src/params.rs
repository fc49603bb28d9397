//! Parameter types shared by every resource.
//!
//! Each resource defines its own params struct and flattens one of these in:
//!
//! - [`Params`] for single-object requests (create, get, update, delete)
//! - [`ListParams`] for list requests (pagination cursors and page size)
//!
//! The [`ParamsContainer`] and [`ListParamsContainer`] traits give the
//! backend and the list iterator access to the common part without knowing
//! the concrete type.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{Form, ListParams};
//!
//! let mut params = ListParams::default();
//! params.limit = Some(3);
//! params.add_expand("data.customer");
//!
//! let form = Form::from_params(&params).unwrap();
//! assert_eq!(form.get("limit"), Some("3"));
//! assert_eq!(form.get("expand[0]"), Some("data.customer"));
//! ```

use std::collections::HashMap;

use serde::Serialize;

/// Parameters accepted by every single-object request.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Params {
    /// Related objects to expand inline in the response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,

    /// Key/value metadata to attach to the object.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    /// Raw form pairs appended after the typed fields, for parameters this
    /// crate does not model.
    #[serde(skip)]
    pub extra: Vec<(String, String)>,

    /// Connected account to act on behalf of. Sent as the `Stripe-Account`
    /// header, never in the body.
    #[serde(skip)]
    pub stripe_account: Option<String>,
}

impl Params {
    /// Adds a field to expand.
    pub fn add_expand(&mut self, field: impl Into<String>) {
        self.expand.push(field.into());
    }

    /// Adds a metadata entry.
    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Adds a raw form pair.
    pub fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.push((key.into(), value.into()));
    }
}

/// Parameters accepted by every list request.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListParams {
    /// Page size, between 1 and 100 on the API side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor for forward paging: return objects after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    /// Cursor for backward paging: return objects before this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,

    /// Related objects to expand, e.g. `data.customer`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,

    /// Fetch at most one page. Never sent to the API.
    #[serde(skip)]
    pub single: bool,

    /// Connected account to act on behalf of.
    #[serde(skip)]
    pub stripe_account: Option<String>,
}

impl ListParams {
    /// Adds a field to expand.
    pub fn add_expand(&mut self, field: impl Into<String>) {
        self.expand.push(field.into());
    }
}

/// Range filter for timestamp fields such as `created`.
///
/// Encodes as `created[gte]=...&created[lt]=...`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RangeQueryParams {
    /// Strictly greater than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    /// Greater than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    /// Strictly less than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    /// Less than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
}

/// Filter on a timestamp field: either an exact unix time or a range.
///
/// # Example
///
/// ```rust
/// use stripe_api::{DateFilter, RangeQueryParams};
///
/// let exact = DateFilter::from(1_500_000_000);
/// let since = DateFilter::from(RangeQueryParams { gte: Some(1_500_000_000), ..Default::default() });
/// # let _ = (exact, since);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateFilter {
    /// Matches one exact timestamp (`created=...`).
    Exact(i64),
    /// Matches a range (`created[gte]=...`).
    Range(RangeQueryParams),
}

impl From<i64> for DateFilter {
    fn from(timestamp: i64) -> Self {
        Self::Exact(timestamp)
    }
}

impl From<RangeQueryParams> for DateFilter {
    fn from(range: RangeQueryParams) -> Self {
        Self::Range(range)
    }
}

/// A params type with a common [`Params`] part.
pub trait ParamsContainer: Serialize + Sync {
    /// Returns the common parameters.
    fn params(&self) -> &Params;
}

/// A params type with a common [`ListParams`] part.
pub trait ListParamsContainer: Serialize + Sync {
    /// Returns the common list parameters.
    fn list_params(&self) -> &ListParams;
}

impl ParamsContainer for Params {
    fn params(&self) -> &Params {
        self
    }
}

impl ListParamsContainer for ListParams {
    fn list_params(&self) -> &ListParams {
        self
    }
}
