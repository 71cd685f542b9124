//! The owned property map backing every document.
//!
//! Keys are unique and iterate in key order, so rendering a document is deterministic.

use std::{
    collections::{BTreeMap, btree_map},
    fmt,
};

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::{
    error::{DocumentError, DocumentResult},
    value::Value,
};

/// A string-keyed bag of [`Value`]s.
///
/// # Example
///
/// ```
/// use propdoc_core::properties::Properties;
///
/// let wheel = Properties::builder()
///     .with("type", "wheel")
///     .with("model", "15C")
///     .with("price", 100)
///     .build();
///
/// assert_eq!(wheel.len(), 3);
/// assert_eq!(wheel.get("model").and_then(|v| v.as_str()), Some("15C"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    entries: BTreeMap<String, Value>,
}

impl Properties {
    /// Creates an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder for assembling a property map before it is wrapped in a document.
    pub fn builder() -> PropertiesBuilder {
        PropertiesBuilder::new()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns `true` if `key` has an entry, even an explicit null.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates over all keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Properties {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Properties {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<JsonMap<String, JsonValue>> for Properties {
    type Error = DocumentError;

    fn try_from(map: JsonMap<String, JsonValue>) -> DocumentResult<Self> {
        map.into_iter()
            .map(|(key, value)| Value::try_from(value).map(|value| (key, value)))
            .collect()
    }
}

impl TryFrom<JsonValue> for Properties {
    type Error = DocumentError;

    /// Builds a property map from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotARecord`] if `json` is not an object, and
    /// [`DocumentError::UnsupportedValue`] if any nested value cannot be represented.
    fn try_from(json: JsonValue) -> DocumentResult<Self> {
        match json {
            JsonValue::Object(map) => Properties::try_from(map),
            other => Err(DocumentError::NotARecord(other.to_string())),
        }
    }
}

/// Builder for constructing [`Properties`] with a fluent API.
#[derive(Debug, Default)]
pub struct PropertiesBuilder {
    properties: Properties,
}

impl PropertiesBuilder {
    /// Creates a builder with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, overwriting any earlier value for the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Sets `key` only when `value` is `Some`.
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.properties.insert(key, value);
        }
        self
    }

    /// Returns the assembled property map.
    pub fn build(self) -> Properties {
        self.properties
    }
}
