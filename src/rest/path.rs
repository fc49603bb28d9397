//! Path building for REST resources.
//!
//! Each resource declares a table of [`ResourcePath`] entries, one per
//! operation, with `{placeholder}` templates. [`format_url_path`] fills the
//! placeholders with percent-escaped identifiers.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::{format_url_path, get_path, ResourceOperation, ResourcePath};
//! use stripe_api::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "/invoiceitems"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, "/invoiceitems/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Retrieve).unwrap();
//! assert_eq!(format_url_path(path.template, &["ii_123"]), "/invoiceitems/ii_123");
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Create a new object (POST /resources).
    Create,
    /// Fetch a single object by id (GET /resources/{id}).
    Retrieve,
    /// Update an existing object (POST /resources/{id}).
    Update,
    /// Delete an object (DELETE /resources/{id}).
    Delete,
    /// List objects page by page (GET /resources).
    List,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Retrieve => "retrieve",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates are absolute and use `{name}` placeholders, e.g.
/// `/invoiceitems/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            template,
        }
    }
}

/// Looks up the path for an operation.
#[must_use]
pub fn get_path(paths: &[ResourcePath], operation: ResourceOperation) -> Option<&ResourcePath> {
    paths.iter().find(|p| p.operation == operation)
}

/// Substitutes identifiers into a path template.
///
/// Placeholders are filled left to right. Each identifier is
/// percent-escaped, so `/` and spaces inside an id cannot change the path
/// structure. Placeholders left over once `ids` runs out stay as they are.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::format_url_path;
///
/// assert_eq!(
///     format_url_path("/invoiceitems/{id}", &["a b/c"]),
///     "/invoiceitems/a%20b%2Fc"
/// );
/// ```
#[must_use]
pub fn format_url_path(template: &str, ids: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut ids = ids.iter();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let Some(id) = ids.next() else {
            break;
        };
        result.push_str(&rest[..start]);
        result.push_str(&urlencoding::encode(id));
        rest = &rest[start + len + 1..];
    }

    result.push_str(rest);
    result
}
