//! Hierarchical url synthesis.
//!
//! A content node's url is the slugs of its ancestors' titles joined root
//! first (`/news/q1-report/`). When other stored nodes already use that url
//! for the active language, the user is notified and the url gets a `-N`
//! suffix, where N is the number of existing duplicates.

mod ancestry;
mod duplicates;
mod notify;
mod path;
mod slug;

pub use ancestry::{collect_ancestors, Ancestry, WalkStop};
pub use duplicates::{count_duplicates, duplicate_message, with_suffix, DUPLICATE_NOTICE_TITLE};
pub use notify::{Notifier, TracingNotifier};
pub use path::assemble_path;
pub use slug::{get_slug, SlugRules, WordChars};

use crate::config::FolioConfig;
use crate::content::ContentSource;
use crate::entity::SchemaError;

/// Upper bound on ancestor walks.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Result of generating a url for one content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUrl {
    pub url: String,
    /// Existing nodes that had the computed path (0 = unique).
    pub duplicates: usize,
    /// The ancestor walk stopped early; `url` covers only the resolvable
    /// part of the ancestry.
    pub truncated: bool,
}

/// Computes urls for content nodes in one language.
pub struct UrlSynthesizer<'n> {
    language: String,
    rules: SlugRules,
    max_depth: usize,
    notifier: &'n dyn Notifier,
}

impl<'n> UrlSynthesizer<'n> {
    pub fn new(language: impl Into<String>, notifier: &'n dyn Notifier) -> Self {
        Self {
            language: language.into(),
            rules: SlugRules::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            notifier,
        }
    }

    /// Language, slug rules and depth bound from configuration.
    pub fn from_config(cfg: &FolioConfig, notifier: &'n dyn Notifier) -> Self {
        Self::new(cfg.language.clone(), notifier)
            .with_rules(cfg.slug_rules())
            .with_max_depth(cfg.max_depth)
    }

    pub fn with_rules(mut self, rules: SlugRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn rules(&self) -> &SlugRules {
        &self.rules
    }

    /// Generate the url for `content_id`.
    ///
    /// Missing ancestors never fail the call; they show up as
    /// `truncated`. The suffixed url is not checked again, so `-N` can itself
    /// collide with an existing url.
    pub fn generate<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        content_id: &str,
    ) -> Result<GeneratedUrl, SchemaError> {
        let ancestry = collect_ancestors(source, content_id, self.max_depth);
        let mut url = assemble_path(&ancestry.nodes, &self.language, &self.rules);

        let duplicates = count_duplicates(source, content_id, &url, &self.language)?;
        if duplicates > 0 {
            self.notifier
                .notify(DUPLICATE_NOTICE_TITLE, &duplicate_message(duplicates, &url));
            url = with_suffix(&url, duplicates);
        }

        tracing::debug!(
            content_id,
            url = %url,
            duplicates,
            truncated = ancestry.truncated(),
            "generated url"
        );

        Ok(GeneratedUrl {
            url,
            duplicates,
            truncated: ancestry.truncated(),
        })
    }

    /// Generate the url for `content_id` and return only the url.
    pub fn generate_url<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        content_id: &str,
    ) -> Result<String, SchemaError> {
        self.generate(source, content_id).map(|g| g.url)
    }
}
