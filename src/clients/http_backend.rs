//! HTTP backend for Stripe API communication.
//!
//! This module provides [`HttpBackend`], the default [`Backend`] that sends
//! requests over HTTPS with `reqwest`.

use std::collections::HashMap;

use crate::clients::backend::Backend;
use crate::clients::errors::Error;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::StripeConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default [`Backend`] over `reqwest`.
///
/// The backend handles:
/// - URL construction as `{api_base}/v1{path}`
/// - Default headers (`User-Agent`, `Accept`, `Stripe-Version`)
/// - Bearer authentication with the request's API key
/// - Query string encoding for GET/DELETE and form bodies for POST
///
/// Requests are sent exactly once. There is no retry logic.
///
/// # Thread Safety
///
/// `HttpBackend` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use stripe_api::{ApiKey, HttpBackend, StripeConfig};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
///
/// let backend = HttpBackend::new(&config).unwrap();
/// assert_eq!(backend.api_base(), "https://api.stripe.com");
/// ```
#[derive(Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    api_base: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpBackend is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpBackend>();
};

impl HttpBackend {
    /// Creates a backend from the given configuration.
    ///
    /// The API key in `config` is not stored here; each request carries its
    /// own key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying reqwest client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(config: &StripeConfig) -> Result<Self, Error> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Stripe API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Stripe-Version".to_string(),
            config.api_version().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_base: config.api_base().to_string(),
            default_headers,
        })
    }

    /// Returns the API base URL (without the `/v1` prefix).
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for a request, including the query string for
    /// methods that carry no body.
    fn url_for(&self, request: &HttpRequest) -> String {
        let url = format!("{}/v1{}", self.api_base, request.path);
        if request.http_method.has_body() || request.form.is_empty() {
            url
        } else {
            format!("{url}?{}", request.form.encode())
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Backend for HttpBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        request.verify()?;

        let url = self.url_for(&request);
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.bearer_auth(request.api_key.as_ref());
        if let Some(account) = &request.stripe_account {
            req_builder = req_builder.header("Stripe-Account", account);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }
        if request.http_method.has_body() {
            req_builder = req_builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(request.form.encode());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to Stripe API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, headers, body);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received response from Stripe API"
        );

        if !response.is_ok() {
            tracing::warn!(
                "Request to Stripe API at {} failed with status {} (request id: {})",
                request.path,
                code,
                response.request_id().unwrap_or("none")
            );
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiBase, ApiKey, ApiVersion};
    use crate::form::Form;

    fn create_test_config() -> StripeConfig {
        StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap()
    }

    fn request(method: HttpMethod, path: &str, form: Form) -> HttpRequest {
        HttpRequest::builder(method, path, ApiKey::new("sk_test_123").unwrap())
            .form(form)
            .build()
            .unwrap()
    }

    #[test]
    fn test_backend_uses_configured_api_base() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .api_base(ApiBase::new("http://localhost:12111/").unwrap())
            .build()
            .unwrap();
        let backend = HttpBackend::new(&config).unwrap();

        assert_eq!(backend.api_base(), "http://localhost:12111");
    }

    #[test]
    fn test_user_agent_header_format() {
        let backend = HttpBackend::new(&create_test_config()).unwrap();

        let user_agent = backend.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Stripe API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let backend = HttpBackend::new(&config).unwrap();

        let user_agent = backend.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Stripe API Library"));
    }

    #[test]
    fn test_stripe_version_header() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .api_version(ApiVersion::new("2017-08-15").unwrap())
            .build()
            .unwrap();
        let backend = HttpBackend::new(&config).unwrap();

        assert_eq!(
            backend.default_headers().get("Stripe-Version"),
            Some(&"2017-08-15".to_string())
        );
        assert_eq!(
            backend.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_url_for_puts_form_in_query_for_get_and_delete() {
        let backend = HttpBackend::new(&create_test_config()).unwrap();
        let mut form = Form::new();
        form.append("limit", "3");

        let get = request(HttpMethod::Get, "/invoiceitems", form.clone());
        assert_eq!(
            backend.url_for(&get),
            "https://api.stripe.com/v1/invoiceitems?limit=3"
        );

        let delete = request(HttpMethod::Delete, "/invoiceitems/ii_1", form.clone());
        assert_eq!(
            backend.url_for(&delete),
            "https://api.stripe.com/v1/invoiceitems/ii_1?limit=3"
        );

        let post = request(HttpMethod::Post, "/invoiceitems", form);
        assert_eq!(
            backend.url_for(&post),
            "https://api.stripe.com/v1/invoiceitems"
        );
    }

    #[test]
    fn test_url_for_omits_empty_query() {
        let backend = HttpBackend::new(&create_test_config()).unwrap();
        let get = request(HttpMethod::Get, "/invoiceitems/ii_1", Form::new());

        assert_eq!(
            backend.url_for(&get),
            "https://api.stripe.com/v1/invoiceitems/ii_1"
        );
    }
}
