//! Url field editor binding.
//!
//! The editor owns the url value of the content node being edited. It is
//! built first and bound to its sibling title field afterwards
//! ([`UrlEditor::bind_title_field`]), once that field has registered; an
//! editor without a value seeds itself from the title at that point.

use crate::content::ContentSource;
use crate::entity::SchemaError;
use crate::url_model::UrlSynthesizer;

type ChangeListener = Box<dyn FnMut(&str)>;

pub struct UrlEditor {
    content_id: String,
    value: String,
    title: Option<String>,
    listeners: Vec<ChangeListener>,
}

impl std::fmt::Debug for UrlEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlEditor")
            .field("content_id", &self.content_id)
            .field("value", &self.value)
            .field("title", &self.title)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl UrlEditor {
    pub fn new(content_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            value: value.into(),
            title: None,
            listeners: Vec::new(),
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current value of the bound title field, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Register a listener called with the new value on every change.
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Manual edit of the url.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.emit_change();
    }

    /// Second initialisation phase: the title field (if the form has one)
    /// has registered. An empty editor fills itself from the title.
    pub fn bind_title_field<S: ContentSource + ?Sized>(
        &mut self,
        title: Option<String>,
        synthesizer: &UrlSynthesizer<'_>,
        source: &S,
    ) -> Result<(), SchemaError> {
        self.title = title;
        if self.value.is_empty() {
            self.fetch_from_title(synthesizer, source)?;
        }
        Ok(())
    }

    /// The bound title field changed.
    pub fn title_changed<S: ContentSource + ?Sized>(
        &mut self,
        title: impl Into<String>,
        synthesizer: &UrlSynthesizer<'_>,
        source: &S,
    ) -> Result<(), SchemaError> {
        self.title = Some(title.into());
        self.fetch_from_title(synthesizer, source)
    }

    /// Seed the value from the title field, then regenerate.
    pub fn fetch_from_title<S: ContentSource + ?Sized>(
        &mut self,
        synthesizer: &UrlSynthesizer<'_>,
        source: &S,
    ) -> Result<(), SchemaError> {
        if let Some(title) = &self.title {
            self.value = title.clone();
        }
        self.regenerate(synthesizer, source)
    }

    /// Recompute the url for the edited node and apply it.
    pub fn regenerate<S: ContentSource + ?Sized>(
        &mut self,
        synthesizer: &UrlSynthesizer<'_>,
        source: &S,
    ) -> Result<(), SchemaError> {
        let generated = synthesizer.generate(source, &self.content_id)?;
        if generated.truncated {
            tracing::warn!(
                content_id = %self.content_id,
                "url built from a partial ancestry"
            );
        }
        self.value = generated.url;
        self.emit_change();
        Ok(())
    }

    fn emit_change(&mut self) {
        let value = self.value.clone();
        for listener in &mut self.listeners {
            listener(&value);
        }
    }
}
