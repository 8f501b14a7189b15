//! URL value model.
//!
//! A [`UrlValue`] is a generic-syntax URL split into its optional components.
//! Values are produced by [`parse`], canonicalized by [`normalize`] (which
//! returns a new value), rendered back by `Display`, and bucketed by
//! [`root_domain`].

mod error;
mod normalize;
mod parse;
mod percent;
mod root_domain;
mod serialize;

use serde::Serialize;
use std::str::FromStr;

pub use error::{MalformedUrlError, MalformedUrlKind};
pub use normalize::normalize;
pub use parse::parse;
pub use root_domain::{root_domain, NO_DOMAIN};

/// A parsed URL. Every component is optional; absent differs from empty
/// (`urn:?#` has an empty query and an empty fragment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct UrlValue {
    scheme: Option<String>,
    user: Option<String>,
    pass: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl UrlValue {
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    /// Host as written; IPv6 literals keep their brackets.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns `user[:pass]@host:port` with absent parts left out, or `None`
    /// when user, host and port are all absent.
    pub fn authority(&self) -> Option<String> {
        serialize::authority(self)
    }

    pub(crate) fn has_authority(&self) -> bool {
        self.user.is_some() || self.host.is_some() || self.port.is_some()
    }
}

impl FromStr for UrlValue {
    type Err = MalformedUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
