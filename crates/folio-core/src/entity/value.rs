//! Field types and runtime field values.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value as Json};

/// Declared type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Date,
    Boolean,
    /// Reference type: a key/value map.
    Object,
    /// Reference type: a list.
    Array,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Boolean => "Boolean",
            FieldType::Object => "Object",
            FieldType::Array => "Array",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value held by an entity field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Number(f64),
    Date(DateTime<Utc>),
    Boolean(bool),
    Object(Map<String, Json>),
    Array(Vec<Json>),
}

impl Value {
    /// The field type this value can be stored in, `None` for `Null`.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Value::Null => None,
            Value::String(_) => Some(FieldType::String),
            Value::Number(_) => Some(FieldType::Number),
            Value::Date(_) => Some(FieldType::Date),
            Value::Boolean(_) => Some(FieldType::Boolean),
            Value::Object(_) => Some(FieldType::Object),
            Value::Array(_) => Some(FieldType::Array),
        }
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        self.field_type().map(FieldType::as_str).unwrap_or("null")
    }

    /// Wire truthiness: null, `""`, `0`, `NaN` and `false` are falsy.
    /// Dates, objects and arrays are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Boolean(b) => *b,
            Value::Date(_) | Value::Object(_) | Value::Array(_) => true,
        }
    }

    /// Decode an untyped wire value destined for a field of type `target`.
    ///
    /// JSON has no date type, so RFC 3339 strings headed for a `Date` field
    /// become dates. Everything else maps one to one; type checking happens
    /// when the value is assigned.
    pub fn from_json(json: &Json, target: FieldType) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) if target == FieldType::Date => DateTime::parse_from_rfc3339(s)
                .map(|d| Value::Date(d.with_timezone(&Utc)))
                .unwrap_or_else(|_| Value::String(s.clone())),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(a) => Value::Array(a.clone()),
            Json::Object(o) => Value::Object(o.clone()),
        }
    }

    /// Encode for the serialization view. Dates use millisecond RFC 3339.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::String(s) => Json::String(s.clone()),
            Value::Number(n) => number_to_json(*n),
            Value::Date(d) => Json::String(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Boolean(b) => Json::Bool(*b),
            Value::Object(o) => Json::Object(o.clone()),
            Value::Array(a) => Json::Array(a.clone()),
        }
    }
}

/// Whole numbers in `i64` range encode as JSON integers so wire integers
/// round-trip; non-finite numbers encode as null.
fn number_to_json(n: f64) -> Json {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Json::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(Json::Number)
        .unwrap_or(Json::Null)
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Map<String, Json>> for Value {
    fn from(o: Map<String, Json>) -> Self {
        Value::Object(o)
    }
}
