//! Domain keys: the grouping key that decides which articles share a site.

use crate::error::{GraphError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    // Greedy prefix, so the capture is the LAST `.tld/` in the link
    static ref DOMAIN_SUFFIX_REGEX: Regex = Regex::new(r".*(\.[a-z]{2,3}/)").unwrap();
}

/// Canonical site-of-origin key derived from an article link.
///
/// For the default extractor this is the link prefix up to and including
/// the last `.tld/` segment, e.g. `https://acadgild.com/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainKey(String);

impl DomainKey {
    /// Wrap an already-derived key. Used by custom [`KeyExtractor`]s.
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing `.tld/` segment (`.com/` for `https://acadgild.com/`).
    /// Keys without a dot are returned whole.
    pub fn suffix(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx..],
            None => &self.0,
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strategy for turning a link into a [`DomainKey`]
pub trait KeyExtractor {
    fn extract(&self, link: &str) -> Result<DomainKey>;
}

impl<F> KeyExtractor for F
where
    F: Fn(&str) -> Result<DomainKey>,
{
    fn extract(&self, link: &str) -> Result<DomainKey> {
        self(link)
    }
}

/// Default extractor: matches `.*(\.[a-z]{2,3}/)` against the link.
///
/// The pattern is not anchored on the host, so a `.xx/` sequence later in
/// the path or query string extends the key into the path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixPatternExtractor;

impl KeyExtractor for SuffixPatternExtractor {
    fn extract(&self, link: &str) -> Result<DomainKey> {
        extract_domain_key(link)
    }
}

/// Extract the domain key of `link`, failing with
/// [`GraphError::MalformedLink`] when no `.tld/` segment is present.
pub fn extract_domain_key(link: &str) -> Result<DomainKey> {
    DOMAIN_SUFFIX_REGEX
        .find(link)
        .map(|m| DomainKey(m.as_str().to_string()))
        .ok_or_else(|| GraphError::MalformedLink(link.to_string()))
}
