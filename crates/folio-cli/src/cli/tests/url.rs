//! Tests for url and tree.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_url() {
    match parse(&["folio", "url", "site.json", "q1"]) {
        CliCommand::Url {
            index,
            id,
            language,
            buffer,
        } => {
            assert_eq!(index, "site.json");
            assert_eq!(id, "q1");
            assert!(language.is_none());
            assert!(buffer.is_none());
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_with_language_and_buffer() {
    match parse(&[
        "folio", "url", "site.json", "q1", "-l", "nb", "--buffer", "edit.json",
    ]) {
        CliCommand::Url {
            language, buffer, ..
        } => {
            assert_eq!(language.as_deref(), Some("nb"));
            assert_eq!(buffer.as_deref(), Some("edit.json"));
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_requires_id() {
    assert!(Cli::try_parse_from(["folio", "url", "site.json"]).is_err());
}

#[test]
fn cli_parse_tree() {
    match parse(&["folio", "tree", "site.json", "--language", "sv"]) {
        CliCommand::Tree { index, language } => {
            assert_eq!(index, "site.json");
            assert_eq!(language.as_deref(), Some("sv"));
        }
        _ => panic!("expected Tree"),
    }
}
