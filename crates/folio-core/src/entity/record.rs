//! Sealed entity instances and their type-checked setters.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value as Json};
use thiserror::Error;

use super::schema::Schema;
use super::value::{FieldType, Value};

/// Assignment failure on a sealed record.
#[derive(Debug, Error, PartialEq)]
pub enum EntityError {
    #[error("{entity} is sealed and has no field '{field}'")]
    UnknownField { entity: &'static str, field: String },

    #[error("{entity}.{field} is of type '{expected}' and cannot implicitly be converted to '{found}'")]
    TypeMismatch {
        entity: &'static str,
        field: String,
        expected: FieldType,
        found: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    name: String,
    field_type: FieldType,
    default: Value,
    value: Value,
}

/// A sealed instance of a [`Schema`]: one slot per declared field, in
/// declaration order. Fields can be written but never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    entity: &'static str,
    slots: Vec<Slot>,
}

impl Record {
    /// Create a record with every field at its default.
    pub fn new(schema: Schema) -> Self {
        let entity = schema.entity();
        let slots = schema
            .fields()
            .iter()
            .map(|f| {
                let default = f.default.resolve();
                Slot {
                    name: f.name().to_string(),
                    field_type: f.field_type(),
                    value: default.clone(),
                    default,
                }
            })
            .collect();
        Self { entity, slots }
    }

    /// Build a record from untyped wire data.
    ///
    /// Each key is assigned as `raw[key] || current[key]`. Assignment errors
    /// (unknown keys, type mismatches) are logged and the field keeps its
    /// default, so partially malformed input still yields a record.
    pub fn hydrate(schema: Schema, raw: &Map<String, Json>) -> Self {
        let mut record = Record::new(schema);
        for (key, raw_value) in raw {
            if let Err(err) = record.assign_raw(key, raw_value) {
                tracing::warn!(entity = record.entity, field = %key, "{}", err);
            }
        }
        record
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.iter().find(|s| s.name == name).map(|s| &s.value)
    }

    /// Assign a value to a declared field.
    ///
    /// Boolean fields fold falsy values to `false` and accept the strings
    /// `"true"` / `"false"`. For other types a falsy value resets the field to
    /// its default and a truthy value of another type is rejected.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), EntityError> {
        let entity = self.entity;
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| EntityError::UnknownField {
                entity,
                field: name.to_string(),
            })?;

        let value = value.into();
        let value = if slot.field_type == FieldType::Boolean {
            coerce_boolean(value)
        } else {
            value
        };

        if slot.field_type != FieldType::Boolean && !value.is_truthy() {
            slot.value = slot.default.clone();
            return Ok(());
        }

        if value.field_type() != Some(slot.field_type) {
            return Err(EntityError::TypeMismatch {
                entity,
                field: name.to_string(),
                expected: slot.field_type,
                found: value.type_name(),
            });
        }

        slot.value = value;
        Ok(())
    }

    /// Decode an untyped wire value for `name` and assign it.
    pub fn set_raw(&mut self, name: &str, raw: &Json) -> Result<(), EntityError> {
        let field_type = self.field_type(name)?;
        self.set(name, Value::from_json(raw, field_type))
    }

    fn assign_raw(&mut self, name: &str, raw: &Json) -> Result<(), EntityError> {
        let field_type = self.field_type(name)?;
        let decoded = Value::from_json(raw, field_type);
        let value = if decoded.is_truthy() {
            decoded
        } else {
            self.get(name).cloned().unwrap_or(Value::Null)
        };
        self.set(name, value)
    }

    fn field_type(&self, name: &str) -> Result<FieldType, EntityError> {
        self.slots
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.field_type)
            .ok_or_else(|| EntityError::UnknownField {
                entity: self.entity,
                field: name.to_string(),
            })
    }

    /// String field value, `""` when unset or not a string.
    pub fn str(&self, name: &str) -> &str {
        match self.get(name) {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }

    pub fn number(&self, name: &str) -> f64 {
        match self.get(name) {
            Some(Value::Number(n)) => *n,
            _ => 0.0,
        }
    }

    pub fn boolean(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Value::Boolean(true)))
    }

    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.get(name) {
            Some(Value::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn object(&self, name: &str) -> Option<&Map<String, Json>> {
        match self.get(name) {
            Some(Value::Object(o)) => Some(o),
            _ => None,
        }
    }

    /// Copy of every declared field as a plain mapping.
    pub fn get_object(&self) -> Map<String, Json> {
        self.slots
            .iter()
            .map(|s| (s.name.clone(), s.value.to_json()))
            .collect()
    }
}

/// Boolean normalization for untyped data, which often carries booleans as
/// strings.
fn coerce_boolean(value: Value) -> Value {
    if !value.is_truthy() {
        return Value::Boolean(false);
    }
    match value {
        Value::String(s) if s == "true" => Value::Boolean(true),
        Value::String(s) if s == "false" => Value::Boolean(false),
        other => other,
    }
}
