//! HTTP response types for the Stripe API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by
//! [`Backend::execute`](crate::clients::Backend::execute), along with the
//! decoding of success bodies and error envelopes.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::errors::{ApiError, Error, ErrorType};

/// The `{"error": {...}}` wrapper around error bodies.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// An HTTP response from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `Request-Id` header value, if present.
    ///
    /// This ID should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body of a 2xx response, or turns a non-2xx response into
    /// [`Error::Api`].
    ///
    /// An empty 2xx body decodes as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Decode`] if
    /// the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_ok() {
            return Err(Error::Api(self.api_error()));
        }
        let body = if self.body.trim().is_empty() {
            "{}"
        } else {
            self.body.as_str()
        };
        Ok(serde_json::from_str(body)?)
    }

    /// Builds the structured error for this response.
    ///
    /// Bodies that are not an error envelope still produce an error carrying
    /// the raw body as its message.
    #[must_use]
    pub fn api_error(&self) -> ApiError {
        let mut error = serde_json::from_str::<ErrorEnvelope>(&self.body).map_or_else(
            |_| ApiError {
                error_type: if self.code >= 500 {
                    ErrorType::ApiError
                } else {
                    ErrorType::Unknown
                },
                message: if self.body.is_empty() {
                    format!("Request failed with status {}", self.code)
                } else {
                    self.body.clone()
                },
                ..ApiError::default()
            },
            |envelope| envelope.error,
        );
        error.http_status = self.code;
        error.request_id = self.request_id().map(ToString::to_string);
        error
    }
}
