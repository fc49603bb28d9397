//! # Stripe API Rust SDK
//!
//! Typed, async clients for the Stripe REST API's invoice item and order
//! return endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - Validated newtypes for the API key, base URL and API version
//! - An explicit [`StripeClient`] that hands out per-resource clients
//! - Create, get, update, delete and list for `/invoiceitems`
//! - List for `/order_returns`
//! - Lazy, cursor-paginating list iterators
//! - A [`Backend`] seam so requests can be served by a test double
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_api::{ApiKey, ApiVersion, StripeClient, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = StripeClient::new(&config).unwrap();
//! # let _ = client;
//! ```
//!
//! ## Invoice Items
//!
//! ```rust,ignore
//! use stripe_api::rest::resources::InvoiceItemParams;
//!
//! let items = client.invoice_items();
//!
//! let created = items
//!     .create(Some(&InvoiceItemParams {
//!         customer: Some("cus_123".to_string()),
//!         amount: Some(1000),
//!         currency: Some("usd".to_string()),
//!         ..Default::default()
//!     }))
//!     .await?;
//!
//! let fetched = items.get("ii_123", None).await?;
//! assert_eq!(fetched.amount, 1000);
//! ```
//!
//! ## Listing
//!
//! `list` returns immediately without network I/O. Pages are fetched as the
//! iterator advances:
//!
//! ```rust,ignore
//! use stripe_api::ListIterator;
//!
//! let mut iter = client.order_returns().list(None);
//! while iter.next().await {
//!     println!("{:?}", iter.order_return());
//! }
//! if let Some(err) = iter.err() {
//!     eprintln!("{err}");
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and clients are passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync` and cheap to clone
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One request per call**: No hidden retries

pub mod clients;
pub mod config;
pub mod error;
pub mod form;
pub mod params;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, ApiVersion, StripeConfig, StripeConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, Backend, Error, ErrorType, HttpBackend, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, StripeClient,
};

pub use form::Form;
pub use params::{
    DateFilter, ListParams, ListParamsContainer, Params, ParamsContainer, RangeQueryParams,
};
pub use rest::{List, ListIter, ListIterator, ListMeta};
