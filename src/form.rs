//! Form encoding for request parameters.
//!
//! The API accepts `application/x-www-form-urlencoded` parameters, with
//! nested values addressed by bracketed keys:
//!
//! | JSON projection                | Form pairs                     |
//! |--------------------------------|--------------------------------|
//! | `{"amount": 1000}`             | `amount=1000`                  |
//! | `{"metadata": {"k": "v"}}`     | `metadata[k]=v`                |
//! | `{"expand": ["customer"]}`     | `expand[0]=customer`           |
//! | `{"created": {"gte": 1}}`      | `created[gte]=1`               |
//!
//! [`Form::from_params`] produces these pairs from any `Serialize` value.
//! `null` values and empty arrays are skipped. Object keys come out sorted at
//! every nesting level, not in struct field order; array elements keep their
//! index order.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::Form;
//! use serde_json::json;
//!
//! let form = Form::from_params(&json!({
//!     "amount": 1000,
//!     "metadata": {"order_id": "6735"},
//! }))
//! .unwrap();
//!
//! assert_eq!(form.get("amount"), Some("1000"));
//! assert_eq!(form.get("metadata[order_id]"), Some("6735"));
//! assert_eq!(form.encode(), "amount=1000&metadata%5Border_id%5D=6735");
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::Error;

/// A list of form key/value pairs, kept in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Form {
    values: Vec<(String, String)>,
}

impl Form {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Encodes a params value into form pairs.
    ///
    /// Keys are added in sorted order within each object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the value cannot be serialized or its
    /// top level is not an object (or unit/`None`).
    pub fn from_params<P: Serialize + ?Sized>(params: &P) -> Result<Self, Error> {
        let value = serde_json::to_value(params).map_err(|e| Error::Encode(e.to_string()))?;

        let mut form = Self::new();
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (key, val) in map {
                    form.flatten(key, val);
                }
            }
            other => {
                return Err(Error::Encode(format!(
                    "expected parameters to serialize to an object, got {other}"
                )));
            }
        }
        Ok(form)
    }

    fn flatten(&mut self, key: String, value: Value) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.append(key, b.to_string()),
            Value::Number(n) => self.append(key, n.to_string()),
            Value::String(s) => self.append(key, s),
            Value::Array(arr) => {
                for (i, v) in arr.into_iter().enumerate() {
                    self.flatten(format!("{key}[{i}]"), v);
                }
            }
            Value::Object(map) => {
                for (sub, v) in map {
                    self.flatten(format!("{key}[{sub}]"), v);
                }
            }
        }
    }

    /// Appends a pair, keeping any existing pairs with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.push((key.into(), value.into()));
    }

    /// Sets a key, replacing every existing pair with that key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.remove(&key);
        self.values.push((key, value.into()));
    }

    /// Removes every pair with the given key.
    pub fn remove(&mut self, key: &str) {
        self.values.retain(|(k, _)| k != key);
    }

    /// Returns the first value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the form has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the pairs in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encodes the pairs as `k=v&k2=v2`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.values
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
