//! Content entity: the model view of a content node.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value as Json};

use crate::content::ContentNode;
use crate::entity::{Entity, FieldType, Record, SchemaBuilder, SchemaError};

#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    record: Record,
}

impl Entity for Content {
    const KIND: &'static str = "Content";

    fn structure(schema: &mut SchemaBuilder) -> Result<(), SchemaError> {
        schema.field(FieldType::String, "id")?;
        schema.field(FieldType::String, "parentId")?;
        schema.field(FieldType::String, "schemaId")?;
        schema.field(FieldType::String, "title")?;
        schema.field(FieldType::Boolean, "isPublished")?;
        schema.field(FieldType::Number, "sort")?;
        schema.field(FieldType::Date, "createDate")?;
        schema.field(FieldType::Date, "updateDate")?;
        schema.field(FieldType::Object, "properties")?;
        Ok(())
    }

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }
}

impl Content {
    /// Materialize a content node as an entity.
    pub fn from_node(node: &ContentNode) -> Result<Self, SchemaError> {
        Self::from_raw(&node.to_raw())
    }

    pub fn id(&self) -> &str {
        self.record.str("id")
    }

    pub fn parent_id(&self) -> Option<&str> {
        Some(self.record.str("parentId")).filter(|p| !p.is_empty())
    }

    pub fn schema_id(&self) -> &str {
        self.record.str("schemaId")
    }

    pub fn is_published(&self) -> bool {
        self.record.boolean("isPublished")
    }

    pub fn sort(&self) -> f64 {
        self.record.number("sort")
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.record.date("createDate")
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.record.date("updateDate")
    }

    pub fn properties(&self) -> Option<&Map<String, Json>> {
        self.record.object("properties")
    }

    /// Property value for `language`: the entry of a per-language map, or
    /// the property itself when it is a plain string.
    pub fn prop(&self, key: &str, language: &str) -> Option<&str> {
        match self.properties()?.get(key)? {
            Json::String(s) => Some(s),
            Json::Object(localized) => localized.get(language)?.as_str(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Json) -> ContentNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn prop_reads_localized_and_plain() {
        let content = Content::from_node(&node(json!({
            "id": "c1",
            "properties": {
                "url": { "en": "/news/", "nb": "/nyheter/" },
                "template": "article"
            }
        })))
        .unwrap();
        assert_eq!(content.prop("url", "nb"), Some("/nyheter/"));
        assert_eq!(content.prop("url", "sv"), None);
        assert_eq!(content.prop("template", "en"), Some("article"));
        assert_eq!(content.prop("missing", "en"), None);
    }

    #[test]
    fn wire_booleans_and_dates() {
        let content = Content::from_node(&node(json!({
            "id": "c2",
            "parentId": "c1",
            "isPublished": "true",
            "sort": 3,
            "createDate": "2022-11-05T10:00:00.000Z"
        })))
        .unwrap();
        assert_eq!(content.parent_id(), Some("c1"));
        assert!(content.is_published());
        assert_eq!(content.sort(), 3.0);
        assert_eq!(
            content.created().unwrap().to_rfc3339(),
            "2022-11-05T10:00:00+00:00"
        );
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let content = Content::from_node(&node(json!({
            "id": "c3",
            "sort": "first",
            "isPublished": "sometimes",
            "properties": { "url": { "en": "/c3/" } }
        })))
        .unwrap();
        assert_eq!(content.sort(), 0.0);
        assert!(!content.is_published());
        assert_eq!(content.prop("url", "en"), Some("/c3/"));
    }

    #[test]
    fn get_object_is_the_declared_schema() {
        let content = Content::from_node(&ContentNode::new("c4", None, Some("Home"))).unwrap();
        let obj = content.get_object();
        assert_eq!(obj.len(), 9);
        assert_eq!(obj["title"], json!("Home"));
        assert_eq!(obj["parentId"], json!(""));
    }
}
