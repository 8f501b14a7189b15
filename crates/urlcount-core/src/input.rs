//! Line-oriented URL list reading (files or stdin).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::InputConfig;

/// Reads one candidate URL per line, applying trimming, blank-line and
/// comment handling from `opts`. Lines are returned in input order.
pub fn read_urls<R: BufRead>(reader: R, opts: &InputConfig) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", index + 1))?;
        let line = if opts.trim_whitespace {
            line.trim().to_string()
        } else {
            line
        };
        if opts.skip_blank_lines && line.is_empty() {
            continue;
        }
        if let Some(prefix) = opts.comment_prefix.as_deref() {
            if !prefix.is_empty() && line.starts_with(prefix) {
                continue;
            }
        }
        urls.push(line);
    }
    tracing::debug!("read {} url lines", urls.len());
    Ok(urls)
}

/// Reads URLs from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_urls_from(path: Option<&Path>, opts: &InputConfig) -> Result<Vec<String>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).with_context(|| format!("open {}", p.display()))?;
            read_urls(BufReader::new(file), opts).with_context(|| format!("read {}", p.display()))
        }
        _ => read_urls(io::stdin().lock(), opts).context("read stdin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn read(input: &str, opts: &InputConfig) -> Vec<String> {
        read_urls(Cursor::new(input), opts).unwrap()
    }

    #[test]
    fn default_trims_and_skips_blank_lines() {
        let urls = read("  https://a.example\n\n\t\nexample  \n", &InputConfig::default());
        assert_eq!(urls, vec!["https://a.example", "example"]);
    }

    #[test]
    fn keeps_raw_lines_when_disabled() {
        let opts = InputConfig {
            trim_whitespace: false,
            skip_blank_lines: false,
            comment_prefix: None,
        };
        let urls = read(" a \n\nb", &opts);
        assert_eq!(urls, vec![" a ", "", "b"]);
    }

    #[test]
    fn skips_comment_lines() {
        let opts = InputConfig {
            comment_prefix: Some("#".to_string()),
            ..InputConfig::default()
        };
        let urls = read("# list\nhttp://x\n  # indented\n", &opts);
        assert_eq!(urls, vec!["http://x"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let urls = read("http://a\r\nhttp://b\r\n", &InputConfig::default());
        assert_eq!(urls, vec!["http://a", "http://b"]);
    }

    #[test]
    fn reads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "https://www.example.com").unwrap();
        writeln!(f, "ftp://127.0.0.1").unwrap();
        f.flush().unwrap();
        let urls = read_urls_from(Some(f.path()), &InputConfig::default()).unwrap();
        assert_eq!(urls, vec!["https://www.example.com", "ftp://127.0.0.1"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_urls_from(Some(&path), &InputConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
    }
}
