//! CLI command handlers, one file per command.

mod completions;
mod entity;
mod id;
mod media;
mod slug;
mod tree;
mod url;

pub use completions::run_completions;
pub use entity::run_entity;
pub use id::run_id;
pub use media::run_media;
pub use slug::run_slug;
pub use tree::run_tree;
pub use url::run_url;

#[cfg(test)]
pub(crate) use tree::tree_listing;
#[cfg(test)]
pub(crate) use url::generate_for;

use anyhow::{Context, Result};
use folio_core::content::ContentIndex;
use std::path::Path;

/// Duplicate notices go to stderr so stdout carries only the url.
fn stderr_notice(title: &str, body: &str) {
    eprintln!("{}: {}", title, body);
}

fn load_index(path: &Path) -> Result<ContentIndex> {
    ContentIndex::load_from_path(path)
        .with_context(|| format!("load content index: {}", path.display()))
}
