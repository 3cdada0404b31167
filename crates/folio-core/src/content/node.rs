//! Content node records as they arrive from the content API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as Json};

/// Node title: a plain string, or one value per language. Per-language
/// entries that are not strings are kept but read as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Title {
    Plain(String),
    Localized(Map<String, Json>),
}

/// `null` reads as an empty mapping.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Json>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Json>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One node of the content tree.
///
/// Localized values (`title`, `url`, ...) live in `properties` as
/// `{ "<key>": { "<language>": "<value>" } }`. Keys this type does not model
/// are kept in `extra` so records survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Json>,
    #[serde(flatten)]
    pub extra: Map<String, Json>,
}

impl ContentNode {
    pub fn new(id: &str, parent_id: Option<&str>, title: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            parent_id: parent_id.map(str::to_string),
            title: title.map(|t| Title::Plain(t.to_string())),
            properties: Map::new(),
            extra: Map::new(),
        }
    }

    /// Parent id; an empty id means no parent.
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }

    pub fn plain_title(&self) -> Option<&str> {
        match &self.title {
            Some(Title::Plain(t)) => Some(t),
            _ => None,
        }
    }

    /// Title shown for `language`: the plain title when there is one,
    /// otherwise the localized title.
    pub fn title_for(&self, language: &str) -> Option<&str> {
        match &self.title {
            Some(Title::Plain(t)) => Some(t),
            Some(Title::Localized(map)) => map
                .get(language)
                .and_then(Json::as_str)
                .or_else(|| self.localized_property("title", language)),
            None => self.localized_property("title", language),
        }
    }

    /// `properties[key][language]` when it is a string.
    pub fn localized_property(&self, key: &str, language: &str) -> Option<&str> {
        self.properties.get(key)?.as_object()?.get(language)?.as_str()
    }

    /// Set `properties[key][language]`, replacing a non-map value.
    pub fn set_localized(&mut self, key: &str, language: &str, value: &str) {
        let entry = self
            .properties
            .entry(key.to_string())
            .or_insert_with(|| Json::Object(Map::new()));
        if !entry.is_object() {
            *entry = Json::Object(Map::new());
        }
        if let Json::Object(map) = entry {
            map.insert(language.to_string(), Json::String(value.to_string()));
        }
    }

    /// Raw property mapping for entity hydration.
    ///
    /// A per-language `title` is moved into `properties.title` (unless that
    /// already exists) so the mapping only carries a plain-string title.
    pub fn to_raw(&self) -> Map<String, Json> {
        let mut raw = Map::new();
        raw.insert("id".to_string(), Json::String(self.id.clone()));
        if let Some(parent) = &self.parent_id {
            raw.insert("parentId".to_string(), Json::String(parent.clone()));
        }

        let mut properties = self.properties.clone();
        match &self.title {
            Some(Title::Plain(t)) => {
                raw.insert("title".to_string(), Json::String(t.clone()));
            }
            Some(Title::Localized(map)) if !properties.contains_key("title") => {
                properties.insert("title".to_string(), Json::Object(map.clone()));
            }
            _ => {}
        }
        raw.insert("properties".to_string(), Json::Object(properties));

        for (k, v) in &self.extra {
            raw.entry(k.clone()).or_insert_with(|| v.clone());
        }
        raw
    }
}
