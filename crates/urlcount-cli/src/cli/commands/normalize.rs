//! `urlcount normalize` – print the canonical form of each URL.

use anyhow::Result;
use urlcount_core::{normalize, parse};

pub fn run_normalize(urls: &[String]) -> Result<()> {
    for line in normalize_all(urls)? {
        println!("{}", line);
    }
    Ok(())
}

fn normalize_all(urls: &[String]) -> Result<Vec<String>> {
    urls.iter()
        .map(|raw| -> Result<String> { Ok(normalize(&parse(raw)?).to_string()) })
        .collect()
}
