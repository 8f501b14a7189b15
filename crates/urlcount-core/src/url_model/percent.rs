//! RFC 3986 percent-encoding helpers shared by path and query normalization.

use percent_encoding::{percent_decode, percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved set `A-Za-z0-9-._~` is encoded.
const RFC3986_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Decodes `%XX` escapes into raw bytes. Malformed escapes are kept verbatim.
pub(super) fn decode(input: &str) -> Vec<u8> {
    percent_decode(input.as_bytes()).collect()
}

/// Form-style decoding: `+` is a space, then `%XX` escapes are decoded.
pub(super) fn form_decode(input: &str) -> Vec<u8> {
    let plus_as_space: Vec<u8> = input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&plus_as_space).collect()
}

/// Encodes bytes with uppercase hex digits, leaving unreserved characters literal.
pub(super) fn encode(bytes: &[u8]) -> String {
    percent_encode(bytes, RFC3986_RESERVED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_leaves_unreserved_literal() {
        assert_eq!(encode(b"AZaz09-._~"), "AZaz09-._~");
    }

    #[test]
    fn encode_uses_uppercase_hex() {
        assert_eq!(encode(b"*"), "%2A");
        assert_eq!(encode(b"a b"), "a%20b");
        assert_eq!(encode(&[0xff]), "%FF");
    }

    #[test]
    fn decode_handles_lowercase_and_malformed_escapes() {
        assert_eq!(decode("%7e%7E"), b"~~");
        assert_eq!(decode("100%"), b"100%");
        assert_eq!(decode("%zz"), b"%zz");
    }

    #[test]
    fn form_decode_treats_plus_as_space() {
        assert_eq!(form_decode("a+b"), b"a b");
        assert_eq!(form_decode("a%2Bb"), b"a+b");
    }
}
