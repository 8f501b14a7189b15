//! Error type for URL parsing.

use thiserror::Error;

/// Returned by [`parse`](super::parse) when the input cannot be decomposed
/// into URL components. Carries the offending raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed URL {raw:?}: {kind}")]
pub struct MalformedUrlError {
    pub raw: String,
    pub kind: MalformedUrlKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedUrlKind {
    /// Port contains something other than ASCII digits.
    #[error("port {0:?} is not numeric")]
    InvalidPort(String),
    /// Port is numeric but above 65535.
    #[error("port {0} is out of range")]
    PortOutOfRange(String),
    /// `[` opened an IPv6 literal that never closes.
    #[error("unterminated IPv6 literal")]
    UnterminatedIpv6Literal,
    /// A host outside `[...]` contains `:` (e.g. `a:b:80`).
    #[error("host {0:?} contains ':' outside an IPv6 literal")]
    ColonInHost(String),
    /// Something other than `:port` follows the closing `]`.
    #[error("unexpected {0:?} after IPv6 literal")]
    TrailingAfterIpv6Literal(String),
}

impl MalformedUrlError {
    pub(crate) fn new(raw: &str, kind: MalformedUrlKind) -> Self {
        Self {
            raw: raw.to_string(),
            kind,
        }
    }
}
