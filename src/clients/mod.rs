//! Client types for Stripe API communication.
//!
//! This module provides the transport layer the resource clients sit on.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StripeClient`]: Owns a backend and key, and hands out resource clients
//! - [`Backend`]: The seam every request goes through
//! - [`HttpBackend`]: The default `reqwest`-based backend
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`Error`] and [`ApiError`]: What a failed call returns
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{ApiKey, StripeClient, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123")?)
//!     .build()?;
//!
//! let client = StripeClient::new(&config)?;
//! let item = client.invoice_items().get("ii_123", None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! Every operation sends exactly one request. Failed requests are not
//! retried; the error is returned to the caller as-is.

mod backend;
mod errors;
mod http_backend;
mod http_request;
mod http_response;
mod stripe_client;

pub use backend::Backend;
pub use errors::{ApiError, Error, ErrorType, InvalidHttpRequestError};
pub use http_backend::{HttpBackend, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use stripe_client::StripeClient;
