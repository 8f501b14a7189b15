//! Counting distinct normalized URLs, overall and per root domain.
//!
//! Every input is parsed and normalized; two inputs count once when their
//! normalized string forms are identical. The first malformed input aborts
//! the whole call and no partial counts are returned.

use std::collections::{BTreeMap, BTreeSet};

use crate::url_model::{normalize, parse, root_domain, MalformedUrlError, NO_DOMAIN};

/// Number of distinct normalized URLs in `urls`.
pub fn count_unique_urls<I>(urls: I) -> Result<usize, MalformedUrlError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Ok(count_unique_urls_per_top_level_domain(urls)?.values().sum())
}

/// Number of distinct normalized URLs per root domain.
///
/// URLs without a root domain (no host, or an IP literal host) are grouped
/// under [`NO_DOMAIN`].
pub fn count_unique_urls_per_top_level_domain<I>(
    urls: I,
) -> Result<BTreeMap<String, usize>, MalformedUrlError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for raw in urls {
        let raw = raw.as_ref();
        let url = normalize(&parse(raw)?);
        let domain = root_domain(&url).unwrap_or_else(|| NO_DOMAIN.to_string());
        let serialized = url.to_string();
        tracing::debug!("counted {:?} as {} (domain {:?})", raw, serialized, domain);
        groups.entry(domain).or_default().insert(serialized);
    }

    Ok(groups
        .into_iter()
        .map(|(domain, urls)| (domain, urls.len()))
        .collect())
}
