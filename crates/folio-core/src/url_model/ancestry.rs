//! Root-ward walk over the content tree.

use std::collections::HashSet;

use crate::content::{ContentNode, ContentSource};

/// Why an ancestor walk stopped before reaching a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkStop {
    /// The id could not be resolved.
    Missing(String),
    /// The id was already visited.
    Cycle(String),
    /// `max_depth` nodes were collected.
    DepthLimit,
}

/// Nodes from the root down to the requested node.
#[derive(Debug, Clone, PartialEq)]
pub struct Ancestry<'a> {
    pub nodes: Vec<&'a ContentNode>,
    pub stop: Option<WalkStop>,
}

impl<'a> Ancestry<'a> {
    /// True when the walk ended early and `nodes` is only the resolvable
    /// prefix of the ancestry.
    pub fn truncated(&self) -> bool {
        self.stop.is_some()
    }
}

/// Collect `content_id` and its ancestors, root first.
///
/// Each id is resolved through `source` (so an editing overlay is consulted
/// before the index). The walk never fails: an unresolvable id, a cycle or
/// the depth bound ends it and is reported in [`Ancestry::stop`].
pub fn collect_ancestors<'a, S: ContentSource + ?Sized>(
    source: &'a S,
    content_id: &str,
    max_depth: usize,
) -> Ancestry<'a> {
    let mut nodes: Vec<&'a ContentNode> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut next = Some(content_id.to_string());
    let mut stop = None;

    while let Some(id) = next.take() {
        if nodes.len() >= max_depth {
            tracing::warn!("content tree deeper than {} nodes at \"{}\"", max_depth, id);
            stop = Some(WalkStop::DepthLimit);
            break;
        }
        if !visited.insert(id.clone()) {
            tracing::warn!("content tree cycle at \"{}\"", id);
            stop = Some(WalkStop::Cycle(id));
            break;
        }
        match source.get(&id) {
            Some(node) => {
                nodes.push(node);
                next = node.parent().map(str::to_string);
            }
            None => {
                tracing::info!("content not found: \"{}\"", id);
                stop = Some(WalkStop::Missing(id));
            }
        }
    }

    nodes.reverse();
    Ancestry { nodes, stop }
}
