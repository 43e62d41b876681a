//! Request parameter handling for resource methods.
//!
//! Resource methods accept an [`Options`] bag of named parameters. The
//! same bag serves three purposes depending on the endpoint: values that
//! appear in the path template are interpolated into the URL, GET and
//! DELETE requests send the bag as query parameters, and POST requests
//! send it as a JSON body.

use std::collections::{BTreeMap, HashMap};

use crate::rest::endpoint::DocsRef;
use crate::rest::errors::ApiError;

/// A bag of named parameters for a resource method call.
///
/// Keys are strings, values are arbitrary JSON. Insertion helpers accept
/// anything convertible to [`serde_json::Value`], so strings, numbers,
/// booleans, and arrays all work directly.
///
/// # Example
///
/// ```rust
/// use bmparts_api::Options;
///
/// let options = Options::new()
///     .with("promo_uuid", "abc-123")
///     .with("public", true);
///
/// assert!(options.contains("promo_uuid"));
/// assert_eq!(options.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    values: BTreeMap<String, serde_json::Value>,
}

impl Options {
    /// Creates an empty parameter bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, consuming and returning the bag for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Inserts a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns `true` if the bag holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the value for a key rendered as a path segment.
    ///
    /// Strings render without surrounding quotes; numbers and booleans
    /// render via their JSON representation. Nulls, arrays, and objects
    /// have no path rendering and return `None`.
    #[must_use]
    pub fn path_param(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            value @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_)) => {
                Some(value.to_string())
            }
            _ => None,
        }
    }

    /// Converts the bag into query parameters for GET and DELETE requests.
    ///
    /// Nulls are skipped, arrays are comma-joined, and nested objects are
    /// serialized as compact JSON.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        for (key, value) in &self.values {
            let rendered = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                other => other.to_string(),
            };
            query.insert(key.clone(), rendered);
        }
        query
    }

    /// Converts the bag into a JSON object body for POST requests.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Validates that all required parameters are present in the bag.
///
/// Collects every missing name rather than stopping at the first, so a
/// caller sees the complete list in one error. The missing names are
/// reported in declaration order.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameters`] naming every absent parameter
/// along with the documentation reference for the endpoint.
pub fn require_params(
    options: &Options,
    required: &[&'static str],
    docs: &DocsRef,
) -> Result<(), ApiError> {
    let mut missing: Vec<&'static str> = Vec::new();
    for &name in required {
        if !options.contains(name) && !missing.contains(&name) {
            missing.push(name);
        }
    }

    if missing.is_empty() {
        return Ok(());
    }

    tracing::warn!(
        "Missing required parameters {missing:?}, see documentation at {docs}"
    );

    Err(ApiError::MissingParameters {
        missing,
        docs: *docs,
    })
}
