//! Persisted domain models built on the entity schema.

mod content;
mod media;

pub use content::Content;
pub use media::{Media, ProjectContext};
