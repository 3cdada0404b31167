//! Url-friendly slugs with Nordic/German character folding.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref UNICODE_STRIP: Regex = Regex::new(r"[^\w -]+").expect("a valid regex");
    static ref ASCII_STRIP: Regex = Regex::new(r"[^A-Za-z0-9_ -]+").expect("a valid regex");
    static ref SPACES: Regex = Regex::new(r" +").expect("a valid regex");
}

/// Which characters survive the strip pass besides space and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordChars {
    /// Unicode word characters (letters, marks, digits, connector punctuation).
    #[default]
    Unicode,
    /// `[A-Za-z0-9_]` only.
    Ascii,
}

/// Slug settings (optional `[slug]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlugRules {
    #[serde(default)]
    pub word_chars: WordChars,
}

impl SlugRules {
    /// Lower-case, fold `æ ä ø ö å ü ß`, strip everything but word
    /// characters, spaces and hyphens, then turn each run of spaces into `-`.
    ///
    /// Folding runs before stripping so folded letters are never lost, and
    /// hyphens survive the strip so that applying the slug twice changes
    /// nothing.
    pub fn slug(&self, input: &str) -> String {
        let folded = fold(&input.to_lowercase());
        let strip = match self.word_chars {
            WordChars::Unicode => &*UNICODE_STRIP,
            WordChars::Ascii => &*ASCII_STRIP,
        };
        let stripped = strip.replace_all(&folded, "");
        SPACES.replace_all(&stripped, "-").into_owned()
    }
}

/// Slug with the default rules.
pub fn get_slug(input: &str) -> String {
    SlugRules::default().slug(input)
}

fn fold(lower: &str) -> String {
    let mut out = String::with_capacity(lower.len());
    for c in lower.chars() {
        match c {
            'æ' | 'ä' => out.push_str("ae"),
            'ø' | 'ö' => out.push_str("oe"),
            'å' => out.push_str("aa"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            other => out.push(other),
        }
    }
    out
}
