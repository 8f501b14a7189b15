//! `urlcount root-domain` – print the root domain of each URL.

use anyhow::Result;
use urlcount_core::{normalize, parse, root_domain};

pub fn run_root_domain(urls: &[String]) -> Result<()> {
    for raw in urls {
        println!("{}", domain_of(raw)?);
    }
    Ok(())
}

/// Root domain of the normalized URL, or "-" when it has none.
fn domain_of(raw: &str) -> Result<String> {
    let url = normalize(&parse(raw)?);
    Ok(root_domain(&url).unwrap_or_else(|| "-".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_dash_for_ip_hosts() {
        assert_eq!(domain_of("ftp://127.0.0.1").unwrap(), "-");
        assert_eq!(domain_of("https://Mail.Example.NET").unwrap(), "example.net");
    }
}
