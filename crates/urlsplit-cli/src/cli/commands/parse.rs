//! `urlsplit parse [url]` – decompose a URL and print it as JSON.

use anyhow::{Context, Result};
use std::io;
use urlsplit_core::url_model::{parse_with, ParseOptions, UrlRecord};

use crate::cli::compat;
use crate::info::INFO;

/// Output flags after merging the command line with the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseFlags {
    pub pretty: bool,
    pub raw: bool,
    pub quiet: bool,
}

/// Parses `url`, or all of stdin when it is `None`, and prints the record.
pub fn run_parse(url: Option<&str>, flags: ParseFlags) -> Result<()> {
    compat::check_compatibility(&INFO, flags.quiet);

    let input = match url {
        Some(url) => url.to_string(),
        None => io::read_to_string(io::stdin()).context("reading URL from stdin")?,
    };

    let record = parse_with(&input, &ParseOptions { raw: flags.raw })
        .with_context(|| format!("parsing URL {:?}", input.trim()))?;
    tracing::debug!(empty = record.is_empty(), raw = flags.raw, "parsed url");

    println!("{}", render(&record, flags.pretty)?);
    Ok(())
}

/// Serializes the record as compact or pretty JSON.
pub fn render(record: &UrlRecord, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(text)
}
