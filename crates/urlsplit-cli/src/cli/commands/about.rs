//! `urlsplit about` – print parser metadata.

use anyhow::Result;

use crate::info::INFO;

pub fn run_about() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&INFO)?);
    Ok(())
}
