//! `urlcount count` – total number of distinct normalized URLs.

use anyhow::Result;
use std::path::Path;
use urlcount_core::config::{InputConfig, OutputFormat};
use urlcount_core::{count_unique_urls, input};

pub fn run_count(path: Option<&Path>, opts: &InputConfig, format: OutputFormat) -> Result<()> {
    let urls = input::read_urls_from(path, opts)?;
    let total = count_unique_urls(&urls)?;
    tracing::info!("{} distinct urls among {} lines", total, urls.len());
    println!("{}", render(total, format)?);
    Ok(())
}

fn render(total: usize, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => total.to_string(),
        OutputFormat::Json => serde_json::to_string(&serde_json::json!({ "unique_urls": total }))?,
    })
}
