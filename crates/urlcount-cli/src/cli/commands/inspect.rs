//! `urlcount inspect` – show parsed URL components.

use anyhow::Result;
use urlcount_core::config::OutputFormat;
use urlcount_core::{normalize, parse, root_domain, UrlValue};

pub fn run_inspect(raw: &str, format: OutputFormat) -> Result<()> {
    let url = parse(raw)?;
    println!("{}", render(&url, format)?);
    Ok(())
}

fn render(url: &UrlValue, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(url)?);
    }

    let port = url.port().map(|p| p.to_string());
    let normalized = normalize(url);
    let domain = root_domain(&normalized);
    let rows = [
        ("scheme", url.scheme()),
        ("user", url.user()),
        ("pass", url.pass()),
        ("host", url.host()),
        ("port", port.as_deref()),
        ("path", url.path()),
        ("query", url.query()),
        ("fragment", url.fragment()),
        ("root domain", domain.as_deref()),
    ];
    let mut out: Vec<String> = rows
        .iter()
        .map(|(name, value)| format!("{:<12} {}", name, value.unwrap_or("-")))
        .collect();
    out.push(format!("{:<12} {}", "normalized", normalized));
    Ok(out.join("\n"))
}
