//! `folio url <index> <id>` – generate the url of one content node.

use anyhow::{Context, Result};
use folio_core::config::FolioConfig;
use folio_core::content::{ContentNode, Overlay};
use folio_core::url_model::{GeneratedUrl, UrlSynthesizer};
use std::fs;
use std::path::Path;

use super::{load_index, stderr_notice};

pub fn run_url(
    cfg: &FolioConfig,
    index_path: &Path,
    id: &str,
    language: Option<&str>,
    buffer_path: Option<&Path>,
) -> Result<()> {
    let generated = generate_for(cfg, index_path, id, language, buffer_path)?;
    if generated.truncated {
        eprintln!(
            "warning: ancestry of \"{}\" could not be fully resolved; url covers the resolvable part",
            id
        );
    }
    println!("{}", generated.url);
    Ok(())
}

/// Load the index (and optional buffer) and generate the url of `id`.
pub(crate) fn generate_for(
    cfg: &FolioConfig,
    index_path: &Path,
    id: &str,
    language: Option<&str>,
    buffer_path: Option<&Path>,
) -> Result<GeneratedUrl> {
    let index = load_index(index_path)?;
    let buffer = buffer_path.map(read_buffer).transpose()?;
    if let Some(node) = &buffer {
        if node.id != id {
            tracing::warn!(
                "buffer holds node \"{}\" but url requested for \"{}\"",
                node.id,
                id
            );
        }
    }

    let notifier = stderr_notice;
    let mut synth = UrlSynthesizer::from_config(cfg, &notifier);
    if let Some(lang) = language {
        synth = synth.with_language(lang);
    }

    let overlay = Overlay::new(buffer.as_ref(), &index);
    Ok(synth.generate(&overlay, id)?)
}

fn read_buffer(path: &Path) -> Result<ContentNode> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read buffer node: {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse buffer node: {}", path.display()))
}
