//! URL parsing, normalization and unique-URL counting.
//!
//! ```
//! use urlcount_core::{count_unique_urls, normalize, parse};
//!
//! let url = normalize(&parse("HTTP://Example.NET:80").unwrap());
//! assert_eq!(url.to_string(), "http://example.net/");
//!
//! let total = count_unique_urls(["http://example.net:80", "http://EXAMPLE.net/"]).unwrap();
//! assert_eq!(total, 1);
//! ```

pub mod config;
pub mod counter;
pub mod input;
pub mod logging;
pub mod url_model;

pub use counter::{count_unique_urls, count_unique_urls_per_top_level_domain};
pub use url_model::{
    normalize, parse, root_domain, MalformedUrlError, MalformedUrlKind, UrlValue, NO_DOMAIN,
};
