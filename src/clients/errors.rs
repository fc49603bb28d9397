//! Error types for Stripe API calls.
//!
//! Every resource operation returns [`Error`] exactly as the backend produced
//! it. The variants are:
//!
//! - [`Error::Api`]: The API answered with a non-2xx status; see [`ApiError`]
//! - [`Error::Network`]: The request never produced a response
//! - [`Error::Decode`]: A 2xx body could not be decoded into the target type
//! - [`Error::Encode`]: Request parameters could not be form-encoded
//! - [`Error::InvalidRequest`]: A request failed validation before sending
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{Error, ErrorType};
//!
//! match client.invoice_items().get("ii_123", None).await {
//!     Ok(item) => println!("amount: {}", item.amount),
//!     Err(Error::Api(e)) if e.error_type == ErrorType::InvalidRequestError => {
//!         println!("bad request ({}): {}", e.http_status, e.message);
//!     }
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The category of an API error, from the `type` field of the error body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The API could not be reached.
    ApiConnectionError,
    /// A problem on the API's side.
    ApiError,
    /// The API key was missing or invalid.
    AuthenticationError,
    /// A card could not be charged.
    CardError,
    /// An idempotency key was reused with different parameters.
    IdempotencyError,
    /// The request had invalid parameters or referenced a missing object.
    InvalidRequestError,
    /// Too many requests hit the API too quickly.
    RateLimitError,
    /// A type this crate does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ErrorType {
    /// Returns the wire name of this error type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiConnectionError => "api_connection_error",
            Self::ApiError => "api_error",
            Self::AuthenticationError => "authentication_error",
            Self::CardError => "card_error",
            Self::IdempotencyError => "idempotency_error",
            Self::InvalidRequestError => "invalid_request_error",
            Self::RateLimitError => "rate_limit_error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured error returned by the API for a non-2xx response.
///
/// The body fields are decoded from `{"error": {...}}`. `http_status` and
/// `request_id` come from the response itself.
///
/// # Example
///
/// ```rust
/// use stripe_api::{ApiError, ErrorType};
///
/// let error = ApiError {
///     error_type: ErrorType::InvalidRequestError,
///     message: "No such invoiceitem: ii_missing".to_string(),
///     code: Some("resource_missing".to_string()),
///     http_status: 404,
///     ..Default::default()
/// };
///
/// assert!(error.is_not_found());
/// assert!(error.to_string().contains("No such invoiceitem"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error_type} ({http_status}): {message}")]
pub struct ApiError {
    /// The category of the error.
    #[serde(rename = "type", default)]
    pub error_type: ErrorType,
    /// A human-readable message.
    #[serde(default)]
    pub message: String,
    /// A short machine-readable code, e.g. `resource_missing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The parameter the error relates to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// For card errors, the issuer's decline reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
    /// A link to documentation about the error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    /// The HTTP status code of the response.
    #[serde(skip)]
    pub http_status: u16,
    /// The `Request-Id` header of the response.
    #[serde(skip)]
    pub request_id: Option<String>,
}

impl ApiError {
    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.http_status == 404
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// Request paths must be absolute (start with `/`).
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// The resource has no path for the requested operation.
    #[error("Resource '{object}' does not support the '{operation}' operation.")]
    UnsupportedOperation {
        /// The resource's `object` name.
        object: &'static str,
        /// The operation that was requested.
        operation: &'static str,
    },
}

/// Unified error type for all API calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The API returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request parameters could not be form-encoded.
    #[error("Failed to encode request parameters: {0}")]
    Encode(String),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl Error {
    /// Returns the structured API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.http_status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the request ID for error reports, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.request_id.as_deref(),
            _ => None,
        }
    }
}
