//! `urlcount per-domain` – distinct normalized URLs grouped by root domain.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use urlcount_core::config::{InputConfig, OutputFormat};
use urlcount_core::{count_unique_urls_per_top_level_domain, input, NO_DOMAIN};

/// Shown in the text table for URLs without a root domain.
const NO_DOMAIN_LABEL: &str = "(none)";

pub fn run_per_domain(path: Option<&Path>, opts: &InputConfig, format: OutputFormat) -> Result<()> {
    let urls = input::read_urls_from(path, opts)?;
    let counts = count_unique_urls_per_top_level_domain(&urls)?;
    println!("{}", render(&counts, format)?);
    Ok(())
}

fn render(counts: &BTreeMap<String, usize>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(counts)?);
    }

    let mut out = format!("{:<32} {}", "DOMAIN", "COUNT");
    for (domain, count) in counts {
        let label = if domain == NO_DOMAIN {
            NO_DOMAIN_LABEL
        } else {
            domain.as_str()
        };
        out.push_str(&format!("\n{:<32} {}", label, count));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<String, usize> {
        [("", 2), ("example.com", 1), ("example.net", 2)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn renders_text_table() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("DOMAIN"));
        assert!(lines[1].starts_with("(none)"));
        assert!(lines[1].ends_with(" 2"));
        assert!(lines[2].starts_with("example.com"));
        assert!(lines[2].ends_with(" 1"));
    }

    #[test]
    fn renders_json_map_with_sentinel_key() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: BTreeMap<String, usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
