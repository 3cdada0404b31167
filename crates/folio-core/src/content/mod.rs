//! Content tree collaborators.
//!
//! The URL synthesizer reads content through [`ContentSource`], which keeps
//! lookups explicit: a flat [`ContentIndex`] as the backing store and an
//! [`Overlay`] that puts the node currently being edited in front of it.

mod index;
mod node;
mod overlay;

pub use index::ContentIndex;
pub use node::{ContentNode, Title};
pub use overlay::Overlay;

/// Read-only access to content nodes.
pub trait ContentSource {
    /// Flat, ordered snapshot of the stored nodes.
    fn nodes(&self) -> &[ContentNode];

    /// First node with the given id.
    fn get(&self, id: &str) -> Option<&ContentNode> {
        self.nodes().iter().find(|n| n.id == id)
    }

    /// Direct children of `parent_id`, in index order.
    fn children_of(&self, parent_id: &str) -> Vec<&ContentNode> {
        self.nodes()
            .iter()
            .filter(|n| n.parent() == Some(parent_id))
            .collect()
    }
}
