//! Schema declaration: the `def` step every entity kind runs before sealing.

use chrono::Utc;
use thiserror::Error;

use super::value::{FieldType, Value};

/// A bad schema declaration. These are programmer errors and are never
/// recovered by the entity layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{entity}: parameter 'name' cannot be empty")]
    EmptyName { entity: &'static str },

    #[error("{entity}.{field} is declared more than once")]
    DuplicateField { entity: &'static str, field: String },

    #[error("{entity}.{field} is of type '{expected}' and its default cannot be of type '{found}'")]
    DefaultMismatch {
        entity: &'static str,
        field: String,
        expected: FieldType,
        found: &'static str,
    },
}

/// Default of a declared field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldDefault {
    Fixed(Value),
    /// Current timestamp, taken when an instance is created.
    Now,
}

impl FieldDefault {
    fn for_type(field_type: FieldType) -> Self {
        match field_type {
            FieldType::String => FieldDefault::Fixed(Value::String(String::new())),
            FieldType::Number => FieldDefault::Fixed(Value::Number(0.0)),
            FieldType::Date => FieldDefault::Now,
            FieldType::Boolean => FieldDefault::Fixed(Value::Boolean(false)),
            FieldType::Object | FieldType::Array => FieldDefault::Fixed(Value::Null),
        }
    }

    pub(crate) fn resolve(&self) -> Value {
        match self {
            FieldDefault::Fixed(v) => v.clone(),
            FieldDefault::Now => Value::Date(Utc::now()),
        }
    }
}

/// One declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    name: String,
    field_type: FieldType,
    pub(crate) default: FieldDefault,
}

impl FieldDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

/// Collects field declarations for one entity kind.
#[derive(Debug)]
pub struct SchemaBuilder {
    entity: &'static str,
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            fields: Vec::new(),
        }
    }

    /// Declare a type-checked field.
    ///
    /// A missing or falsy `default` is replaced by the type default: `""`,
    /// `0`, the creation timestamp, `false`, or null for reference types.
    pub fn def(
        &mut self,
        field_type: FieldType,
        name: &str,
        default: Option<Value>,
    ) -> Result<(), SchemaError> {
        if name.is_empty() {
            return Err(SchemaError::EmptyName {
                entity: self.entity,
            });
        }
        if self.fields.iter().any(|f| f.name == name) {
            return Err(SchemaError::DuplicateField {
                entity: self.entity,
                field: name.to_string(),
            });
        }

        let default = match default.filter(Value::is_truthy) {
            None => FieldDefault::for_type(field_type),
            Some(v) if v.field_type() == Some(field_type) => FieldDefault::Fixed(v),
            Some(v) => {
                return Err(SchemaError::DefaultMismatch {
                    entity: self.entity,
                    field: name.to_string(),
                    expected: field_type,
                    found: v.type_name(),
                })
            }
        };

        self.fields.push(FieldDef {
            name: name.to_string(),
            field_type,
            default,
        });
        Ok(())
    }

    /// Shorthand for `def` with the type default.
    pub fn field(&mut self, field_type: FieldType, name: &str) -> Result<(), SchemaError> {
        self.def(field_type, name, None)
    }

    /// Seal the declarations.
    pub fn finish(self) -> Schema {
        Schema {
            entity: self.entity,
            fields: self.fields,
        }
    }
}

/// Sealed field declarations of one entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    entity: &'static str,
    fields: Vec<FieldDef>,
}

impl Schema {
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
