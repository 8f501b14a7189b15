//! Rendering a [`UrlValue`] back to a string.

use std::fmt;

use super::UrlValue;

/// `[user[:pass]@][host][:port]`, or `None` when user, host and port are absent.
pub(super) fn authority(url: &UrlValue) -> Option<String> {
    if !url.has_authority() {
        return None;
    }

    let mut out = String::new();
    if let Some(user) = &url.user {
        out.push_str(user);
        if let Some(pass) = &url.pass {
            out.push(':');
            out.push_str(pass);
        }
        out.push('@');
    }
    if let Some(host) = &url.host {
        out.push_str(host);
    }
    if let Some(port) = url.port {
        out.push(':');
        out.push_str(&port.to_string());
    }
    Some(out)
}

/// Absent components are omitted together with their punctuation.
impl fmt::Display for UrlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}:", scheme)?;
        }
        let authority = authority(self);
        if let Some(authority) = &authority {
            write!(f, "//{}", authority)?;
        }
        if let Some(path) = &self.path {
            // Without an authority, a leading `//` would read back as one.
            if authority.is_none() && path.starts_with("//") {
                f.write_str("/.")?;
            }
            f.write_str(path)?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
