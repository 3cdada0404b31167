//! CLI for the Folio content model.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use folio_core::config;
use std::path::Path;

use commands::{
    run_completions, run_entity, run_id, run_media, run_slug, run_tree, run_url,
};

/// Top-level CLI for the Folio content model.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Folio: content entities and hierarchical url synthesis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Entity kinds that can be hydrated from a raw JSON record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Content,
    Media,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the url slug of a text.
    Slug {
        /// Text to slugify (e.g. a title).
        text: String,
    },

    /// Generate the url of a content node.
    Url {
        /// Path to the content index (JSON array of content nodes).
        index: String,

        /// Id of the content node.
        id: String,

        /// Language of titles and urls (defaults to the configured language).
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// Unsaved version of the node (JSON object) that takes precedence over the index.
        #[arg(long, value_name = "NODE_JSON")]
        buffer: Option<String>,
    },

    /// Print the generated url of every node in a content index, as a tree.
    Tree {
        /// Path to the content index (JSON array of content nodes).
        index: String,

        /// Language of titles and urls (defaults to the configured language).
        #[arg(long, short = 'l')]
        language: Option<String>,
    },

    /// Describe the media entity for a stored file.
    Media {
        /// Path of the file: `<...>/<media id>/<file name>`.
        path: String,
    },

    /// Hydrate a raw JSON record as an entity and print its fields.
    Entity {
        /// Entity kind.
        #[arg(value_enum)]
        kind: EntityKind,

        /// Path to the JSON record.
        file: String,
    },

    /// Print a fresh entity id.
    Id,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions must not touch the config dir.
        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell, &mut Cli::command());
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Slug { text } => run_slug(&cfg, &text),
            CliCommand::Url {
                index,
                id,
                language,
                buffer,
            } => {
                run_url(
                    &cfg,
                    Path::new(&index),
                    &id,
                    language.as_deref(),
                    buffer.as_deref().map(Path::new),
                )?;
            }
            CliCommand::Tree { index, language } => {
                run_tree(&cfg, Path::new(&index), language.as_deref())?;
            }
            CliCommand::Media { path } => run_media(&cfg, Path::new(&path))?,
            CliCommand::Entity { kind, file } => run_entity(kind, Path::new(&file))?,
            CliCommand::Id => run_id(),
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
