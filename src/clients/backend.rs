//! The backend seam every resource client talks through.
//!
//! A [`Backend`] only has to know how to execute a prepared [`HttpRequest`].
//! The provided [`Backend::call`] and [`Backend::call_raw`] methods handle
//! form encoding, the `Stripe-Account` header and JSON decoding on top of
//! that, so test doubles stay small:
//!
//! ```rust,ignore
//! struct Canned(String);
//!
//! impl Backend for Canned {
//!     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, Error> {
//!         Ok(HttpResponse::new(200, HashMap::new(), self.0.clone()))
//!     }
//! }
//! ```

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::clients::errors::Error;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ApiKey;
use crate::form::Form;
use crate::params::{ListParams, ParamsContainer};

/// Executes API requests.
///
/// Implementations must be shareable across tasks; resource clients hold
/// them behind an `Arc`.
pub trait Backend: Send + Sync + 'static {
    /// Sends a prepared request and returns the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors. Only failures
    /// to obtain a response at all are errors.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Error>> + Send;

    /// Encodes `params`, sends one request and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the params cannot be encoded, the error
    /// from [`Backend::execute`], [`Error::Api`] for a non-2xx response, or
    /// [`Error::Decode`] if the body does not match `T`.
    fn call<P, T>(
        &self,
        method: HttpMethod,
        path: &str,
        key: &ApiKey,
        params: Option<&P>,
    ) -> impl Future<Output = Result<T, Error>> + Send
    where
        P: ParamsContainer + ?Sized,
        T: DeserializeOwned + Send,
    {
        let request = prepare(method, path, key, params);
        async move {
            let response = self.execute(request?).await?;
            response.json()
        }
    }

    /// Sends one request with an already encoded form, taking the
    /// `Stripe-Account` header from list params. Used by list iterators.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::call`], minus encoding.
    fn call_raw<T>(
        &self,
        method: HttpMethod,
        path: &str,
        key: &ApiKey,
        form: &Form,
        params: &ListParams,
    ) -> impl Future<Output = Result<T, Error>> + Send
    where
        T: DeserializeOwned + Send,
    {
        let request = HttpRequest::builder(method, path, key.clone())
            .form(form.clone())
            .maybe_stripe_account(params.stripe_account.as_deref())
            .build();
        async move {
            let response = self.execute(request?).await?;
            response.json()
        }
    }
}

fn prepare<P: ParamsContainer + ?Sized>(
    method: HttpMethod,
    path: &str,
    key: &ApiKey,
    params: Option<&P>,
) -> Result<HttpRequest, Error> {
    let mut builder = HttpRequest::builder(method, path, key.clone());
    if let Some(params) = params {
        let mut form = Form::from_params(params)?;
        for (k, v) in &params.params().extra {
            form.append(k.as_str(), v.as_str());
        }
        builder = builder
            .form(form)
            .maybe_stripe_account(params.params().stripe_account.as_deref());
    }
    Ok(builder.build()?)
}
