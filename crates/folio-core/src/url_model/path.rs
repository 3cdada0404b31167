//! Url path assembly from a root-to-target node list.

use crate::content::ContentNode;

use super::slug::SlugRules;

/// `/<slug>/<slug>/.../` for the given nodes, root first.
///
/// Each node contributes the slug of its title in `language`. A missing
/// title, or one that slugs to nothing, adds no segment, so the result never
/// contains `//`; with no titled nodes at all the path is `/`.
pub fn assemble_path(nodes: &[&ContentNode], language: &str, rules: &SlugRules) -> String {
    let mut url = String::from("/");
    for node in nodes {
        let slug = rules.slug(node.title_for(language).unwrap_or_default());
        if slug.is_empty() {
            continue;
        }
        url.push_str(&slug);
        url.push('/');
    }
    url
}
