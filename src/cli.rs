//! Command-line interface: argument parsing and the one-shot `query` command.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::controller::SearchController;
use crate::dom::{MemoryDocument, SubmitEvent};
use crate::search::HttpSearchBackend;
use crate::ui::search::SearchState;

#[derive(Debug, Parser)]
#[command(name = "worksearch", version, about = "Search the works and show matches as a table")]
pub struct Cli {
    /// Config file (default: ~/.config/worksearch/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Search backend base URL, overriding config and environment
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one search and print the result table
    Query {
        /// Query text, sent verbatim
        text: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Log request details to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Interactive search screen (default)
    Tui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Count line followed by tab-separated rows
    Text,
    /// Escaped `<tr>` rows as they would be inserted into the table body
    Html,
}

impl Cli {
    /// Loads config from `--config` or the default path, then applies the
    /// environment and `--base-url` overrides and validates the result.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        config.apply_env_overrides();
        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Submits `text` once and renders the outcome in `format`.
///
/// Fails when the search ends in the error state.
pub async fn run_query(config: Config, text: &str, format: OutputFormat) -> anyhow::Result<String> {
    let backend = HttpSearchBackend::new(&config.client).context("Failed to set up search client")?;
    let document = MemoryDocument::with_regions(&config.regions);
    let regions = config.regions.clone();
    let controller = SearchController::new(backend, document, config.regions, config.labels);

    let mut event = SubmitEvent::new(regions.form.as_str()).with_field(regions.query_field.as_str(), text);
    controller.handle_submit(&mut event).finished().await;

    if let SearchState::Error { message } = controller.state() {
        anyhow::bail!("Search failed: {}", message);
    }

    let output = controller.with_document(|document| match format {
        OutputFormat::Html => document.rows_html(&regions.table_body),
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "{} result(s)",
                document.text_content(&regions.count_value)
            )];
            for row in document.rows(&regions.table_body) {
                lines.push(format!(
                    "{}\t{}",
                    row.matched.lines().join(" / "),
                    row.work.lines().join(" ")
                ));
            }
            lines.join("\n")
        }
    });
    Ok(output)
}
