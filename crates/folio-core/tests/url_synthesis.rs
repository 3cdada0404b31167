mod common;

use common::{site, RecordingNotifier};
use folio_core::content::{ContentNode, ContentSource, Overlay};
use folio_core::editor::UrlEditor;
use folio_core::entity::Entity;
use folio_core::models::Content;
use folio_core::url_model::{collect_ancestors, UrlSynthesizer, WalkStop, DUPLICATE_NOTICE_TITLE};

#[test]
fn fixture_loads_every_node() {
    let idx = site();
    assert_eq!(idx.len(), 7);
    let children: Vec<&str> = idx
        .children_of("news")
        .into_iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(children, ["q1", "q1-copy", "q1-draft", "bridge"]);
}

#[test]
fn stored_duplicate_gets_suffix() {
    let idx = site();
    let notifier = RecordingNotifier::default();
    let synth = UrlSynthesizer::new("en", &notifier);

    let generated = synth.generate(&idx, "q1").unwrap();
    assert_eq!(generated.url, "/news/q1-report-1/");
    assert_eq!(generated.duplicates, 1);

    let notices = notifier.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, DUPLICATE_NOTICE_TITLE);
    assert_eq!(
        notices[0].1,
        "1 content node has the same URL \"/news/q1-report/\". Appending \"-1\"."
    );
}

#[test]
fn unsaved_node_counts_every_stored_duplicate() {
    let idx = site();
    let notifier = RecordingNotifier::default();
    let synth = UrlSynthesizer::new("en", &notifier);
    assert_eq!(synth.generate_url(&idx, "q1-draft").unwrap(), "/news/q1-report-2/");
}

#[test]
fn other_language_is_unique() {
    let idx = site();
    let notifier = RecordingNotifier::default();
    let synth = UrlSynthesizer::new("nb", &notifier);
    assert_eq!(
        synth.generate_url(&idx, "q1").unwrap(),
        "/nyheter/rapport-for-foerste-kvartal/"
    );
    assert!(notifier.notices.borrow().is_empty());
}

#[test]
fn orphan_keeps_its_own_segment() {
    let idx = site();
    let ancestry = collect_ancestors(&idx, "orphan", 16);
    assert_eq!(
        ancestry.stop,
        Some(WalkStop::Missing("deleted-section".to_string()))
    );

    let notifier = RecordingNotifier::default();
    let synth = UrlSynthesizer::new("en", &notifier);
    let generated = synth.generate(&idx, "orphan").unwrap();
    assert_eq!(generated.url, "/lost-found/");
    assert!(generated.truncated);
}

#[test]
fn editor_follows_title_edits() {
    let idx = site();
    let notifier = RecordingNotifier::default();
    let synth = UrlSynthesizer::new("en", &notifier);

    let mut editor = UrlEditor::new("bridge", "");
    editor
        .bind_title_field(Some("Öresund Bridge".to_string()), &synth, &idx)
        .unwrap();
    assert_eq!(editor.value(), "/news/oeresund-bridge/");

    let mut edited = idx.get("bridge").cloned().unwrap();
    edited.title = None;
    edited.set_localized("title", "en", "Storebælt Bridge");
    let overlay = Overlay::new(Some(&edited), &idx);
    editor
        .title_changed("Storebælt Bridge", &synth, &overlay)
        .unwrap();
    assert_eq!(editor.value(), "/news/storebaelt-bridge/");
}

#[test]
fn moved_node_uses_new_parent() {
    let idx = site();
    let moved = ContentNode::new("q1-draft", Some("root"), Some("Q1 Report"));
    let overlay = Overlay::new(Some(&moved), &idx);

    let notifier = RecordingNotifier::default();
    let synth = UrlSynthesizer::new("en", &notifier);
    assert_eq!(synth.generate_url(&overlay, "q1-draft").unwrap(), "/q1-report/");
    assert!(notifier.notices.borrow().is_empty());
}

#[test]
fn fixture_nodes_hydrate_as_content() {
    let idx = site();
    let q1 = Content::from_node(idx.get("q1").unwrap()).unwrap();
    assert_eq!(q1.parent_id(), Some("news"));
    assert_eq!(q1.schema_id(), "article");
    assert!(!q1.is_published());
    assert_eq!(q1.sort(), 1.0);
    assert_eq!(q1.get_object()["sort"], serde_json::json!(1));
    assert_eq!(q1.prop("url", "nb"), Some("/nyheter/rapport-for-foerste-kvartal/"));
    let created = q1.created().unwrap();
    assert_eq!(created.to_rfc3339(), "2024-01-15T09:00:00+00:00");
    assert!(q1.updated().unwrap() > created);

    let news = Content::from_node(idx.get("news").unwrap()).unwrap();
    assert!(news.is_published());
    assert_eq!(news.get_object()["isPublished"], serde_json::json!(true));
}
