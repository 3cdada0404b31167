//! Flat, ordered content index (the backing store).

use anyhow::{Context, Result};
use std::path::Path;

use super::{ContentNode, ContentSource};

/// Every known content node, in the order the content API returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentIndex {
    nodes: Vec<ContentNode>,
}

impl ContentIndex {
    pub fn from_nodes(nodes: Vec<ContentNode>) -> Self {
        Self { nodes }
    }

    /// Parse a JSON array of content records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let nodes: Vec<ContentNode> =
            serde_json::from_str(json).context("parse content index")?;
        Ok(Self { nodes })
    }

    /// Load a JSON array of content records from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read content index: {}", path.display()))?;
        let index = Self::from_json_str(&data)
            .with_context(|| format!("load content index: {}", path.display()))?;
        tracing::debug!(
            "loaded {} content nodes from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    pub fn push(&mut self, node: ContentNode) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes without a resolvable parent, in index order.
    pub fn roots(&self) -> Vec<&ContentNode> {
        self.nodes
            .iter()
            .filter(|n| n.parent().map_or(true, |p| self.get(p).is_none()))
            .collect()
    }
}

impl ContentSource for ContentIndex {
    fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }
}
