//! `folio entity <kind> <file>` – hydrate a raw record and print its fields.

use anyhow::{Context, Result};
use folio_core::entity::Entity;
use folio_core::models::{Content, Media};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::cli::EntityKind;

pub fn run_entity(kind: EntityKind, path: &Path) -> Result<()> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read record: {}", path.display()))?;
    let raw: Value =
        serde_json::from_str(&data).with_context(|| format!("parse record: {}", path.display()))?;

    let fields = match kind {
        EntityKind::Content => object_of::<Content>(&raw)?,
        EntityKind::Media => object_of::<Media>(&raw)?,
    };
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}

fn object_of<E: Entity>(raw: &Value) -> Result<Map<String, Value>> {
    Ok(E::from_json(raw)?.get_object())
}
