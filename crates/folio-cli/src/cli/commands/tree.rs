//! `folio tree <index>` – print every node's generated url, indented by depth.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::content::{ContentNode, ContentSource};
use folio_core::url_model::UrlSynthesizer;
use std::collections::HashSet;
use std::path::Path;

use super::{load_index, stderr_notice};

pub fn run_tree(cfg: &FolioConfig, index_path: &Path, language: Option<&str>) -> Result<()> {
    let listing = tree_listing(cfg, index_path, language)?;
    for line in &listing.lines {
        println!("{}", line);
    }
    if listing.unreachable > 0 {
        tracing::warn!(
            "{} nodes are not reachable from any root",
            listing.unreachable
        );
        eprintln!(
            "warning: {} nodes are not reachable from any root and were skipped",
            listing.unreachable
        );
    }
    Ok(())
}

/// Rendered tree plus the number of records no root walk reached (parent
/// cycles, repeated ids).
#[derive(Debug)]
pub(crate) struct TreeListing {
    pub lines: Vec<String>,
    pub unreachable: usize,
}

pub(crate) fn tree_listing(
    cfg: &FolioConfig,
    index_path: &Path,
    language: Option<&str>,
) -> Result<TreeListing> {
    let index = load_index(index_path)?;

    let notifier = stderr_notice;
    let mut synth = UrlSynthesizer::from_config(cfg, &notifier);
    if let Some(lang) = language {
        synth = synth.with_language(lang);
    }

    let mut lines = Vec::new();
    let mut seen = HashSet::new();
    let mut stack: Vec<(&ContentNode, usize)> =
        index.roots().into_iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        if !seen.insert(node.id.as_str()) {
            continue;
        }
        let url = synth.generate_url(&index, &node.id)?;
        lines.push(format!("{}{}  {}", "  ".repeat(depth), url, node.id));
        let children = index.children_of(&node.id);
        stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
    }

    Ok(TreeListing {
        lines,
        unreachable: index.len().saturating_sub(seen.len()),
    })
}
