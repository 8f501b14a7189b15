//! Query normalization: decompose into pairs, sort by key, re-encode.

use crate::url_model::percent;

/// Returns the canonical query, or `None` when it is empty or has no pairs.
///
/// Pairs are separated by `&` or `;`. Keys and values are form-decoded
/// (`+` is a space) and re-encoded with RFC 3986 rules. Sorting is stable,
/// so repeated keys keep their relative order.
pub(super) fn normalize_query(query: &str) -> Option<String> {
    let mut pairs: Vec<(Vec<u8>, Vec<u8>)> = query
        .split(['&', ';'])
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent::form_decode(key), percent::form_decode(value))
        })
        .collect();

    if pairs.is_empty() {
        return None;
    }

    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", percent::encode(key), percent::encode(value)))
        .collect();
    Some(encoded.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_pairs_by_key() {
        assert_eq!(normalize_query("b=2&a=1").as_deref(), Some("a=1&b=2"));
    }

    #[test]
    fn sort_is_stable_for_repeated_keys() {
        assert_eq!(
            normalize_query("k=2&a=0&k=1").as_deref(),
            Some("a=0&k=2&k=1")
        );
    }

    #[test]
    fn semicolon_separates_pairs() {
        assert_eq!(
            normalize_query("q=s&q2=a+b;q3=sp%0Ace").as_deref(),
            Some("q=s&q2=a%20b&q3=sp%0Ace")
        );
    }

    #[test]
    fn empty_query_is_dropped() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("&;&"), None);
    }

    #[test]
    fn missing_value_becomes_empty() {
        assert_eq!(normalize_query("flag&a=1").as_deref(), Some("a=1&flag="));
    }

    #[test]
    fn value_keeps_later_equals_signs() {
        assert_eq!(normalize_query("a=b=c").as_deref(), Some("a=b%3Dc"));
    }

    #[test]
    fn sorts_by_decoded_bytes() {
        // "%41" decodes to "A" (0x41), which sorts before "B".
        assert_eq!(normalize_query("B=1&%41=2").as_deref(), Some("A=2&B=1"));
    }
}
