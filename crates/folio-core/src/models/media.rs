//! Media entity: an uploaded file addressed under the project's media root.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use crate::entity::{create_id, Entity, EntityError, FieldType, Record, SchemaBuilder, SchemaError};

/// Project and environment a media url is namespaced under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub project: String,
    pub environment: String,
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self {
            project: "default".to_string(),
            environment: "live".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    record: Record,
}

impl Entity for Media {
    const KIND: &'static str = "Media";

    fn structure(schema: &mut SchemaBuilder) -> Result<(), SchemaError> {
        schema.field(FieldType::String, "id")?;
        schema.field(FieldType::String, "name")?;
        schema.field(FieldType::String, "url")?;
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

impl Media {
    /// New media entity with a fresh id.
    pub fn create() -> Result<Self, SchemaError> {
        let mut raw = Map::new();
        raw.insert("id".to_string(), Json::String(create_id()));
        Self::from_raw(&raw)
    }

    pub fn id(&self) -> &str {
        self.record.str("id")
    }

    pub fn name(&self) -> &str {
        self.record.str("name")
    }

    pub fn url(&self) -> &str {
        self.record.str("url")
    }

    /// Fill id, name and url from where the file is stored.
    ///
    /// Files live at `<...>/<media id>/<file name>`: the parent directory
    /// names the media entity and the name is the file name without its
    /// extension.
    pub fn read_from_file_path(
        &mut self,
        file_path: &Path,
        project: &ProjectContext,
    ) -> Result<(), EntityError> {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let id = file_path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let url = format!("/media/{}/{}/{}", project.project, project.environment, id);
        self.record.set("id", id)?;
        self.record.set("name", strip_extension(&file_name))?;
        self.record.set("url", url)?;
        Ok(())
    }
}

/// Drop the last `.ext` of a file name. A name that is only an extension
/// (`.hidden`) becomes empty; a trailing dot is kept.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project() -> ProjectContext {
        ProjectContext {
            project: "harbour".to_string(),
            environment: "staging".to_string(),
        }
    }

    #[test]
    fn read_from_file_path_derives_fields() {
        let mut media = Media::with_defaults().unwrap();
        media
            .read_from_file_path(Path::new("storage/media/4f2a9c/harbour-at-dawn.jpg"), &project())
            .unwrap();
        assert_eq!(media.id(), "4f2a9c");
        assert_eq!(media.name(), "harbour-at-dawn");
        assert_eq!(media.url(), "/media/harbour/staging/4f2a9c");
    }

    #[test]
    fn only_last_extension_is_removed() {
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("README"), "README");
        assert_eq!(strip_extension(".hidden"), "");
        assert_eq!(strip_extension("trailing."), "trailing.");
    }

    #[test]
    fn create_assigns_fresh_id() {
        let a = Media::create().unwrap();
        let b = Media::create().unwrap();
        assert_eq!(a.id().len(), 40);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), "");
    }

    #[test]
    fn get_object_has_exactly_the_schema() {
        let media = Media::from_json(&json!({
            "id": "m1",
            "name": "logo",
            "url": "/media/p/e/m1",
            "size": 1024
        }))
        .unwrap();
        let obj = media.get_object();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["name"], json!("logo"));
        assert!(!obj.contains_key("size"));
    }

    #[test]
    fn undeclared_field_rejected() {
        let mut media = Media::with_defaults().unwrap();
        assert!(matches!(
            media.set("size", 10.0),
            Err(EntityError::UnknownField { .. })
        ));
        assert_eq!(media.get_object().len(), 3);
    }

    #[test]
    fn non_object_properties_give_defaults() {
        let media = Media::from_json(&json!("m1")).unwrap();
        assert_eq!(media.id(), "");
    }
}
