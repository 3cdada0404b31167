//! Two-tier content source: the open editing buffer in front of the index.

use super::{ContentNode, ContentSource};

/// Looks ids up in the editing buffer first, then in the backing store.
///
/// The flat snapshot (`nodes`) is the backing store only: unsaved edits are
/// visible to tree walks but not to duplicate scans.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a, S: ?Sized> {
    buffer: Option<&'a ContentNode>,
    store: &'a S,
}

impl<'a, S: ContentSource + ?Sized> Overlay<'a, S> {
    pub fn new(buffer: Option<&'a ContentNode>, store: &'a S) -> Self {
        Self { buffer, store }
    }

    pub fn buffer(&self) -> Option<&'a ContentNode> {
        self.buffer
    }
}

impl<'a, S: ContentSource + ?Sized> ContentSource for Overlay<'a, S> {
    fn nodes(&self) -> &[ContentNode] {
        self.store.nodes()
    }

    fn get(&self, id: &str) -> Option<&ContentNode> {
        match self.buffer {
            Some(buffer) if buffer.id == id => Some(buffer),
            _ => self.store.get(id),
        }
    }

    fn children_of(&self, parent_id: &str) -> Vec<&ContentNode> {
        let Some(buffer) = self.buffer else {
            return self.store.children_of(parent_id);
        };

        let buffer_is_child = buffer.parent() == Some(parent_id);
        let mut emitted = false;
        let mut children = Vec::new();
        for node in self.store.children_of(parent_id) {
            if node.id != buffer.id {
                children.push(node);
            } else if buffer_is_child && !emitted {
                children.push(buffer);
                emitted = true;
            }
        }
        if buffer_is_child && !emitted {
            children.push(buffer);
        }
        children
    }
}
