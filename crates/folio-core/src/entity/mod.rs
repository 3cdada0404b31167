//! Typed entity schema.
//!
//! Every persisted model declares its fields once in [`Entity::structure`].
//! The declarations are sealed into a [`Schema`], and instances are
//! [`Record`]s whose setters check the declared type at runtime. Concrete
//! entities wrap a record and expose typed accessors, so runtime checks only
//! run for untyped input (wire data, `set_raw`).

mod id;
mod record;
mod schema;
mod value;

pub use id::{create_id, ID_BYTES};
pub use record::{EntityError, Record};
pub use schema::{FieldDef, Schema, SchemaBuilder, SchemaError};
pub use value::{FieldType, Value};

use serde_json::{Map, Value as Json};

/// A domain object backed by a sealed, schema-declared record.
pub trait Entity: Sized {
    /// Entity kind, used in error messages and logs.
    const KIND: &'static str;

    /// Declare the fields of this entity kind.
    fn structure(schema: &mut SchemaBuilder) -> Result<(), SchemaError>;

    fn from_record(record: Record) -> Self;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    fn schema() -> Result<Schema, SchemaError> {
        let mut builder = SchemaBuilder::new(Self::KIND);
        Self::structure(&mut builder)?;
        Ok(builder.finish())
    }

    /// Instance with every field at its default.
    fn with_defaults() -> Result<Self, SchemaError> {
        Ok(Self::from_record(Record::new(Self::schema()?)))
    }

    /// Hydrate from raw properties; bad fields are logged and skipped.
    fn from_raw(raw: &Map<String, Json>) -> Result<Self, SchemaError> {
        Ok(Self::from_record(Record::hydrate(Self::schema()?, raw)))
    }

    /// Hydrate from any JSON value. Anything but an object carries no
    /// properties and yields the defaults.
    fn from_json(raw: &Json) -> Result<Self, SchemaError> {
        match raw {
            Json::Object(map) => Self::from_raw(map),
            other => {
                tracing::warn!(entity = Self::KIND, "ignoring non-object properties: {}", other);
                Self::with_defaults()
            }
        }
    }

    /// Untyped assignment through the runtime type check.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), EntityError> {
        self.record_mut().set(name, value)
    }

    fn get_object(&self) -> Map<String, Json> {
        self.record().get_object()
    }

    #[deprecated(note = "use `get_object`")]
    fn get_fields(&self) -> Map<String, Json> {
        self.get_object()
    }
}
