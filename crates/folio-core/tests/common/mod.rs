//! Shared fixtures for integration tests.

use std::cell::RefCell;
use std::path::PathBuf;

use folio_core::content::ContentIndex;
use folio_core::url_model::Notifier;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn site() -> ContentIndex {
    ContentIndex::load_from_path(&fixture_path("site.json")).expect("site fixture loads")
}

/// Notifier that keeps every notice for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.notices
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
    }
}
