//! `folio slug <text>` – print the slug under the configured rules.

use folio_core::config::FolioConfig;

pub fn run_slug(cfg: &FolioConfig, text: &str) {
    println!("{}", cfg.slug_rules().slug(text));
}
