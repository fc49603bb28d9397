//! Entry point that hands out pre-configured resource clients.

use std::sync::Arc;

use crate::clients::{Backend, Error, HttpBackend};
use crate::config::{ApiKey, StripeConfig};
use crate::rest::resources::{invoice_item, order_return};

/// Owns one backend and an API key, and builds resource clients that share
/// them.
///
/// There is no global default client; construct one of these where the
/// application is wired up and pass it (or clones of it) around.
///
/// # Thread Safety
///
/// `StripeClient` is `Clone`, `Send` and `Sync`. Clones share the backend.
///
/// # Example
///
/// ```rust
/// use stripe_api::{ApiKey, StripeClient, StripeConfig};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = StripeClient::new(&config).unwrap();
/// let invoice_items = client.invoice_items();
/// let order_returns = client.order_returns();
/// # let _ = (invoice_items, order_returns);
/// ```
#[derive(Debug)]
pub struct StripeClient<B: Backend = HttpBackend> {
    backend: Arc<B>,
    key: ApiKey,
}

// Verify StripeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeClient>();
};

impl StripeClient<HttpBackend> {
    /// Creates a client backed by an [`HttpBackend`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be created.
    pub fn new(config: &StripeConfig) -> Result<Self, Error> {
        let backend = HttpBackend::new(config)?;
        tracing::debug!(
            api_base = %config.api_base(),
            api_version = %config.api_version(),
            test_mode = config.api_key().is_test_mode(),
            "Created Stripe client"
        );
        Ok(Self {
            backend: Arc::new(backend),
            key: config.api_key().clone(),
        })
    }
}

impl<B: Backend> StripeClient<B> {
    /// Creates a client over any backend, e.g. a test double.
    #[must_use]
    pub fn with_backend(backend: B, key: ApiKey) -> Self {
        Self {
            backend: Arc::new(backend),
            key,
        }
    }

    /// Returns a client for `/invoiceitems`.
    #[must_use]
    pub fn invoice_items(&self) -> invoice_item::Client<B> {
        invoice_item::Client::new(Arc::clone(&self.backend), self.key.clone())
    }

    /// Returns a client for `/order_returns`.
    #[must_use]
    pub fn order_returns(&self) -> order_return::Client<B> {
        order_return::Client::new(Arc::clone(&self.backend), self.key.clone())
    }

    /// Returns the shared backend.
    #[must_use]
    pub const fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Returns the API key used for every request.
    #[must_use]
    pub const fn key(&self) -> &ApiKey {
        &self.key
    }
}

impl<B: Backend> Clone for StripeClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::testing::{test_key, StubBackend};

    #[test]
    fn test_new_builds_http_backend_from_config() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap();

        let client = StripeClient::new(&config).unwrap();
        assert_eq!(client.backend().api_base(), "https://api.stripe.com");
        assert_eq!(client.key().as_ref(), "sk_test_123");
    }

    #[tokio::test]
    async fn test_resource_clients_share_one_backend() {
        let client = StripeClient::with_backend(
            StubBackend::with_responses(&[(200, r#"{"id":"ii_1"}"#)]),
            test_key(),
        );

        client.invoice_items().get("ii_1", None).await.unwrap();
        let _ = client.order_returns().list(None);
        let cloned = client.clone();

        assert!(Arc::ptr_eq(client.backend(), cloned.backend()));
        assert_eq!(client.backend().request_count(), 1);
        assert_eq!(
            client.backend().request(0).api_key.as_ref(),
            "sk_test_123"
        );
    }
}
