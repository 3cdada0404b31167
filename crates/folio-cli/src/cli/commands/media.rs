//! `folio media <path>` – media entity for a stored file, as JSON.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::entity::Entity;
use folio_core::models::Media;
use std::path::Path;

pub fn run_media(cfg: &FolioConfig, path: &Path) -> Result<()> {
    let mut media = Media::create()?;
    media.read_from_file_path(path, &cfg.project_context())?;
    println!("{}", serde_json::to_string_pretty(&media.get_object())?);
    Ok(())
}
