//! Best-effort generic-URI decomposition.

use super::error::{MalformedUrlError, MalformedUrlKind};
use super::UrlValue;

/// Parses `raw` into its components.
///
/// Absent components are always legal: a bare token such as `example` parses
/// to a value with only `path` set. Fails only when the authority is
/// structurally broken (non-numeric or out-of-range port, bad IPv6 literal,
/// colon inside an unbracketed host).
pub fn parse(raw: &str) -> Result<UrlValue, MalformedUrlError> {
    let (scheme, rest) = split_scheme(raw);

    let (rest, fragment) = match rest.split_once('#') {
        Some((before, frag)) => (before, Some(frag.to_string())),
        None => (rest, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((before, q)) => (before, Some(q.to_string())),
        None => (rest, None),
    };

    let mut url = UrlValue {
        scheme: scheme.map(str::to_string),
        query,
        fragment,
        ..UrlValue::default()
    };

    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            parse_authority(raw, &after[..end], &mut url)?;
            &after[end..]
        }
        None => rest,
    };
    if !path.is_empty() {
        url.path = Some(path.to_string());
    }

    Ok(url)
}

/// Splits a leading `scheme:` off `raw` when the text before the first colon
/// is a valid scheme token.
fn split_scheme(raw: &str) -> (Option<&str>, &str) {
    let Some((candidate, rest)) = raw.split_once(':') else {
        return (None, raw);
    };
    let mut chars = candidate.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    };
    if valid {
        (Some(candidate), rest)
    } else {
        (None, raw)
    }
}

fn parse_authority(
    raw: &str,
    authority: &str,
    url: &mut UrlValue,
) -> Result<(), MalformedUrlError> {
    let hostport = match authority.rsplit_once('@') {
        Some((userinfo, hostport)) => {
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    url.user = Some(user.to_string());
                    url.pass = Some(pass.to_string());
                }
                None => url.user = Some(userinfo.to_string()),
            }
            hostport
        }
        None => authority,
    };

    let (host, port) = split_host_port(raw, hostport)?;
    if !host.is_empty() {
        url.host = Some(host.to_string());
    }
    if let Some(port) = port.filter(|p| !p.is_empty()) {
        url.port = Some(parse_port(raw, port)?);
    }
    Ok(())
}

/// Splits `host[:port]`, treating colons inside `[...]` as part of the host.
fn split_host_port<'a>(
    raw: &str,
    hostport: &'a str,
) -> Result<(&'a str, Option<&'a str>), MalformedUrlError> {
    if hostport.starts_with('[') {
        let close = hostport.find(']').ok_or_else(|| {
            MalformedUrlError::new(raw, MalformedUrlKind::UnterminatedIpv6Literal)
        })?;
        let (host, after) = hostport.split_at(close + 1);
        return match after.strip_prefix(':') {
            Some(port) => Ok((host, Some(port))),
            None if after.is_empty() => Ok((host, None)),
            None => Err(MalformedUrlError::new(
                raw,
                MalformedUrlKind::TrailingAfterIpv6Literal(after.to_string()),
            )),
        };
    }

    let (host, port) = match hostport.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (hostport, None),
    };
    if host.contains(':') {
        tracing::debug!("rejecting {:?}: colon in unbracketed host {:?}", raw, host);
        return Err(MalformedUrlError::new(
            raw,
            MalformedUrlKind::ColonInHost(host.to_string()),
        ));
    }
    Ok((host, port))
}

fn parse_port(raw: &str, port: &str) -> Result<u16, MalformedUrlError> {
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!("rejecting {:?}: non-numeric port {:?}", raw, port);
        return Err(MalformedUrlError::new(
            raw,
            MalformedUrlKind::InvalidPort(port.to_string()),
        ));
    }
    port.parse::<u16>().map_err(|_| {
        tracing::debug!("rejecting {:?}: port {} out of range", raw, port);
        MalformedUrlError::new(raw, MalformedUrlKind::PortOutOfRange(port.to_string()))
    })
}
