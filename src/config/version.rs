//! Stripe API version definitions.
//!
//! Stripe versions are release dates (`YYYY-MM-DD`) sent with every request
//! in the `Stripe-Version` header. This module provides the [`ApiVersion`]
//! type pinning the version the resource types were modelled against.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Stripe API version.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "2018-02-28");
///
/// let version: ApiVersion = "2017-08-15".parse().unwrap();
/// assert!(version < ApiVersion::latest());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The version the resource types in this crate are modelled against.
    pub const PINNED: &'static str = "2018-02-28";

    /// Returns the pinned API version.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::PINNED.to_string())
    }

    /// Creates a version from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the string is not a date
    /// in `YYYY-MM-DD` form.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if chrono::NaiveDate::parse_from_str(&version, "%Y-%m-%d").is_err() || version.len() != 10
        {
            return Err(ConfigError::InvalidApiVersion { version });
        }
        Ok(Self(version))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
