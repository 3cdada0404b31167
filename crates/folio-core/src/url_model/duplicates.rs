//! Duplicate url detection and `-N` disambiguation.

use crate::content::ContentSource;
use crate::entity::SchemaError;
use crate::models::Content;

/// Title of the duplicate-url notice.
pub const DUPLICATE_NOTICE_TITLE: &str = "Duplicate URLs";

/// Count stored nodes other than `content_id` whose url in `language`
/// equals `url`. Each node is read through the `Content` entity so that
/// malformed records are tolerated the same way everywhere.
pub fn count_duplicates<S: ContentSource + ?Sized>(
    source: &S,
    content_id: &str,
    url: &str,
    language: &str,
) -> Result<usize, SchemaError> {
    let mut same = 0;
    for node in source.nodes() {
        if node.id == content_id {
            continue;
        }
        let content = Content::from_node(node)?;
        if content.prop("url", language) == Some(url) {
            same += 1;
        }
    }
    Ok(same)
}

/// Body of the duplicate-url notice.
pub fn duplicate_message(count: usize, url: &str) -> String {
    let subject = if count == 1 {
        "content node has"
    } else {
        "content nodes have"
    };
    format!("{count} {subject} the same URL \"{url}\". Appending \"-{count}\".")
}

/// Replace the trailing `/` with `-<count>/`. A url without a trailing
/// slash is returned unchanged.
pub fn with_suffix(url: &str, count: usize) -> String {
    match url.strip_suffix('/') {
        Some(stem) => format!("{stem}-{count}/"),
        None => url.to_string(),
    }
}
