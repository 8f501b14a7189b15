//! Canonicalization of parsed URLs.

mod path;
mod query;

use super::UrlValue;

/// Returns the canonical form of `url`. The input is left untouched.
///
/// Steps, in order:
/// 1. lowercase the scheme;
/// 2. drop userinfo (normalized URLs never carry credentials);
/// 3. lowercase the host;
/// 4. drop port 80 for `http` and 443 for `https`;
/// 5. re-encode path segments and remove dot segments, or use `/` when an
///    authority has no path;
/// 6. drop an empty query, otherwise sort its pairs by key;
/// 7. drop the fragment.
pub fn normalize(url: &UrlValue) -> UrlValue {
    let scheme = url.scheme.as_deref().map(str::to_ascii_lowercase);
    let host = url.host.as_deref().map(str::to_ascii_lowercase);
    let port = url
        .port
        .filter(|&port| !is_default_port(scheme.as_deref(), port));

    let path = url
        .path
        .as_deref()
        .and_then(path::normalize_path)
        .or_else(|| (host.is_some() || port.is_some()).then(|| "/".to_string()));

    let query = url.query.as_deref().and_then(query::normalize_query);

    UrlValue {
        scheme,
        user: None,
        pass: None,
        host,
        port,
        path,
        query,
        fragment: None,
    }
}

fn is_default_port(scheme: Option<&str>, port: u16) -> bool {
    matches!((scheme, port), (Some("http"), 80) | (Some("https"), 443))
}
