//! The untyped value stored under each property key.
//!
//! [`Value`] is a closed tagged union: a scalar, a nested record, or an ordered sequence
//! of nested records. Typed readers go through [`FromValue`], which matches the union
//! exhaustively instead of casting, so every shape mismatch is an explicit case.

use std::fmt;

use serde_json::Value as JsonValue;

use crate::{
    error::{DocumentError, DocumentResult},
    properties::Properties,
};

/// A property value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null. Reads treat it exactly like an absent key.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating point scalar.
    Float(f64),
    /// Text scalar.
    Text(String),
    /// A single nested record.
    Record(Properties),
    /// An ordered sequence of nested records, the storage shape of child documents.
    Records(Vec<Properties>),
}

/// The shape of a [`Value`], used to describe mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::Int`].
    Int,
    /// [`Value::Float`].
    Float,
    /// [`Value::Text`].
    Text,
    /// [`Value::Record`].
    Record,
    /// [`Value::Records`].
    Records,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Record => "record",
            ValueKind::Records => "sequence of records",
        };

        f.write_str(name)
    }
}

impl Value {
    /// Returns the shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Record(_) => ValueKind::Record,
            Value::Records(_) => ValueKind::Records,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Int`]. Floats are not converted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`]. Integers are not converted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text if this is a [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the nested map if this is a [`Value::Record`].
    pub fn as_record(&self) -> Option<&Properties> {
        match self {
            Value::Record(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the nested maps if this is a [`Value::Records`].
    pub fn as_records(&self) -> Option<&[Properties]> {
        match self {
            Value::Records(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => f.write_str(value),
            Value::Record(record) => write!(f, "{record}"),
            Value::Records(records) => {
                f.write_str("[")?;
                for (index, record) in records.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{record}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Properties> for Value {
    fn from(value: Properties) -> Self {
        Value::Record(value)
    }
}

impl From<Vec<Properties>> for Value {
    fn from(value: Vec<Properties>) -> Self {
        Value::Records(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = DocumentError;

    /// Converts untyped JSON input into a [`Value`].
    ///
    /// Objects become records and arrays must contain only objects. Integral numbers
    /// become [`Value::Int`] and fractional numbers become [`Value::Float`]; integers
    /// outside the `i64` range are rejected rather than rounded into a float.
    fn try_from(json: JsonValue) -> DocumentResult<Self> {
        match json {
            JsonValue::Null => Ok(Value::Null),
            JsonValue::Bool(value) => Ok(Value::Bool(value)),
            JsonValue::Number(number) => match number.as_i64() {
                Some(value) => Ok(Value::Int(value)),
                None if number.is_u64() => Err(DocumentError::UnsupportedValue(format!(
                    "integer {number} does not fit in a 64-bit signed integer"
                ))),
                None => number
                    .as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| DocumentError::UnsupportedValue(number.to_string())),
            },
            JsonValue::String(value) => Ok(Value::Text(value)),
            JsonValue::Object(map) => Ok(Value::Record(Properties::try_from(map)?)),
            JsonValue::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    JsonValue::Object(map) => Properties::try_from(map),
                    other => Err(DocumentError::UnsupportedValue(format!(
                        "array element {other} is not an object"
                    ))),
                })
                .collect::<DocumentResult<Vec<_>>>()
                .map(Value::Records),
        }
    }
}

/// Interprets a stored [`Value`] as a concrete Rust type.
///
/// Implementations never coerce between shapes: an integer is not a float and text is
/// not a number. Returning `None` signals a shape mismatch; the caller turns it into
/// [`DocumentError::TypeMismatch`] using [`FromValue::KIND`].
pub trait FromValue: Sized {
    /// The shape this type is read from.
    const KIND: ValueKind;

    /// Returns the typed value, or `None` if `value` has a different shape.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for Properties {
    const KIND: ValueKind = ValueKind::Record;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_record().cloned()
    }
}

impl FromValue for Vec<Properties> {
    const KIND: ValueKind = ValueKind::Records;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_records().map(<[Properties]>::to_vec)
    }
}
