//! The [`Resource`] trait implemented by every API object type.
//!
//! A resource knows its wire `object` name, the paths of its operations and
//! how to report its own id. The list iterator uses the id to build
//! pagination cursors.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{Resource, ResourceOperation, ResourcePath};
//! use stripe_api::HttpMethod;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Coupon {
//!     pub id: Option<String>,
//! }
//!
//! impl Resource for Coupon {
//!     const OBJECT: &'static str = "coupon";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "/coupons"),
//!     ];
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//! ```

use serde::de::DeserializeOwned;

use crate::clients::InvalidHttpRequestError;
use crate::rest::{get_path, ResourceOperation, ResourcePath};

/// An object type returned by the API.
///
/// # Required Bounds
///
/// Resources must be deserializable and thread-safe so iterators over them
/// can move between tasks.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// The value of the `object` field, e.g. `"invoiceitem"`.
    const OBJECT: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the object's id, if present.
    fn id(&self) -> Option<&str>;

    /// Looks up the path for an operation in [`Resource::PATHS`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::UnsupportedOperation`] if the table
    /// has no entry for `operation`.
    fn path(
        operation: ResourceOperation,
    ) -> Result<&'static ResourcePath, InvalidHttpRequestError> {
        get_path(Self::PATHS, operation).ok_or(InvalidHttpRequestError::UnsupportedOperation {
            object: Self::OBJECT,
            operation: operation.as_str(),
        })
    }
}
