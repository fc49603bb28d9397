//! HTTP request types for the Stripe API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! is what a [`Backend`](crate::clients::Backend) is asked to execute.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::ApiKey;
use crate::form::Form;

/// HTTP methods used by the resource clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving and listing resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if parameters travel in the request body rather than
    /// the query string.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request to be sent to the API.
///
/// # Example
///
/// ```rust
/// use stripe_api::{ApiKey, Form, HttpMethod, HttpRequest};
///
/// let mut form = Form::new();
/// form.append("amount", "1000");
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/invoiceitems", ApiKey::new("sk_test_1").unwrap())
///     .form(form)
///     .stripe_account("acct_123")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/invoiceitems");
/// assert_eq!(request.form.get("amount"), Some("1000"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path below the versioned API root, e.g. `/invoiceitems/ii_123`.
    pub path: String,
    /// The key used to authenticate this request.
    pub api_key: ApiKey,
    /// Encoded parameters (query string for GET/DELETE, body for POST).
    pub form: Form,
    /// Connected account to act on behalf of (`Stripe-Account` header).
    pub stripe_account: Option<String>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>, api_key: ApiKey) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path, api_key)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPath`] if the path does not
    /// start with `/`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    api_key: ApiKey,
    form: Form,
    stripe_account: Option<String>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            api_key,
            form: Form::new(),
            stripe_account: None,
            extra_headers: None,
        }
    }

    /// Sets the encoded parameters.
    #[must_use]
    pub fn form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    /// Sets the connected account header.
    #[must_use]
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Sets the connected account header when one is given.
    #[must_use]
    pub fn maybe_stripe_account(mut self, account: Option<&str>) -> Self {
        self.stripe_account = account.map(ToString::to_string);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            api_key: self.api_key,
            form: self.form,
            stripe_account: self.stripe_account,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
