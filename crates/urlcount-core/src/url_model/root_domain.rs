//! Naive two-label root domain extraction.

use std::net::IpAddr;

use super::UrlValue;

/// Key used by the counter for URLs without a root domain.
pub const NO_DOMAIN: &str = "";

/// Returns the last two labels of the host (`mail.example.net` →
/// `example.net`), or the host itself when it has a single label.
///
/// `None` when there is no host or the host is an IPv4/IPv6 literal.
/// Multi-part public suffixes such as `co.uk` are not recognized.
pub fn root_domain(url: &UrlValue) -> Option<String> {
    let host = url.host.as_deref()?;
    if is_ip_literal(host) {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();
    let start = labels.len().saturating_sub(2);
    Some(labels[start..].join("."))
}

fn is_ip_literal(host: &str) -> bool {
    let bare = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    bare.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::parse;

    fn domain(raw: &str) -> Option<String> {
        root_domain(&parse(raw).unwrap())
    }

    #[test]
    fn takes_last_two_labels() {
        assert_eq!(domain("https://mail.example.net").as_deref(), Some("example.net"));
        assert_eq!(domain("https://a.b.c.example.com/x").as_deref(), Some("example.com"));
        assert_eq!(domain("https://example.com").as_deref(), Some("example.com"));
    }

    #[test]
    fn single_label_host_is_its_own_root() {
        assert_eq!(domain("udp://localhost").as_deref(), Some("localhost"));
    }

    #[test]
    fn ip_literals_have_no_domain() {
        assert_eq!(domain("ftp://127.0.0.1"), None);
        assert_eq!(domain("http://[::1]:8080/"), None);
        assert_eq!(domain("http://[2001:db8::7]"), None);
    }

    #[test]
    fn no_host_has_no_domain() {
        assert_eq!(domain("example"), None);
        assert_eq!(domain("file:///etc/hosts"), None);
        assert_eq!(domain("mailto:someone@example.com"), None);
    }

    #[test]
    fn compound_suffix_is_misclassified() {
        assert_eq!(domain("http://www.example.co.uk").as_deref(), Some("co.uk"));
    }
}
