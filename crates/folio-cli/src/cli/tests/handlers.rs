//! Tests for the url and tree handlers over an index written to disk.

use crate::cli::commands::{generate_for, tree_listing};
use folio_core::config::FolioConfig;
use std::io::Write;
use tempfile::NamedTempFile;

const INDEX: &str = r#"[
    {"id": "1"},
    {"id": "2", "parentId": "1", "title": "News"},
    {"id": "3", "parentId": "2", "title": "Q1 Report"},
    {"id": "4", "parentId": "2", "title": {"en": "Q1 Report", "nb": "Rapport"},
     "properties": {"url": {"en": "/news/q1-report/"}}},
    {"id": "5", "parentId": "gone", "title": "Lost", "properties": null},
    {"id": "a", "parentId": "b"},
    {"id": "b", "parentId": "a"}
]"#;

fn write_json(json: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn url_handler_applies_duplicate_suffix() {
    let index = write_json(INDEX);
    let generated = generate_for(&FolioConfig::default(), index.path(), "3", None, None).unwrap();
    assert_eq!(generated.url, "/news/q1-report-1/");
    assert_eq!(generated.duplicates, 1);
    assert!(!generated.truncated);
}

#[test]
fn url_handler_honours_language_override() {
    let index = write_json(INDEX);
    let generated =
        generate_for(&FolioConfig::default(), index.path(), "4", Some("nb"), None).unwrap();
    assert_eq!(generated.url, "/news/rapport/");
}

#[test]
fn url_handler_reads_buffer_node() {
    let index = write_json(INDEX);
    let buffer = write_json(r#"{"id": "3", "parentId": "2", "title": "Q2 Report"}"#);
    let generated = generate_for(
        &FolioConfig::default(),
        index.path(),
        "3",
        None,
        Some(buffer.path()),
    )
    .unwrap();
    assert_eq!(generated.url, "/news/q2-report/");
}

#[test]
fn url_handler_reports_truncated_ancestry() {
    let index = write_json(INDEX);
    let generated = generate_for(&FolioConfig::default(), index.path(), "5", None, None).unwrap();
    assert_eq!(generated.url, "/lost/");
    assert!(generated.truncated);
}

#[test]
fn url_handler_rejects_unreadable_index() {
    let index = write_json("not json");
    let err = generate_for(&FolioConfig::default(), index.path(), "3", None, None).unwrap_err();
    assert!(format!("{:#}", err).contains("load content index"));
}

#[test]
fn tree_handler_lists_reachable_nodes() {
    let index = write_json(INDEX);
    let listing = tree_listing(&FolioConfig::default(), index.path(), None).unwrap();
    assert_eq!(
        listing.lines,
        [
            "/  1",
            "  /news/  2",
            "    /news/q1-report-1/  3",
            "    /news/q1-report/  4",
            "/lost/  5",
        ]
    );
    assert_eq!(listing.unreachable, 2);
}

#[test]
fn tree_handler_counts_repeated_ids_as_unreachable() {
    let index = write_json(r#"[{"id": "1", "title": "Home"}, {"id": "1", "title": "Again"}]"#);
    let listing = tree_listing(&FolioConfig::default(), index.path(), None).unwrap();
    assert_eq!(listing.lines, ["/home/  1"]);
    assert_eq!(listing.unreachable, 1);
}
