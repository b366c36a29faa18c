//! CLI for the urlsplit URL decomposer.

mod commands;
mod compat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlsplit_core::config::{self, UrlsplitConfig};

use commands::{run_about, run_parse, ParseFlags};

/// Top-level CLI for urlsplit.
#[derive(Debug, Parser)]
#[command(name = "urlsplit", version)]
#[command(about = "Decompose a URL into normalized forms, path segments and query parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL and print the decomposed record as JSON.
    Parse {
        /// URL to parse, optionally as `<URL:...>`. Read from stdin when omitted.
        url: Option<String>,

        /// Pretty-print the JSON output.
        #[arg(short, long)]
        pretty: bool,

        /// Print the record without schema post-processing.
        #[arg(short, long)]
        raw: bool,

        /// Suppress platform compatibility warnings.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show parser metadata (version, description, compatible platforms).
    About,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            UrlsplitConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse {
                url,
                pretty,
                raw,
                quiet,
            } => {
                let flags = ParseFlags {
                    pretty: pretty || cfg.pretty,
                    raw: raw || cfg.raw,
                    quiet: quiet || cfg.quiet,
                };
                run_parse(url.as_deref(), flags)?;
            }
            CliCommand::About => run_about()?,
        }

        Ok(())
    }
}
