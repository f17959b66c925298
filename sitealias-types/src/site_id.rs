//! The platform's internal numeric site identifier.
//!
//! Site ids are assigned by the host analytics platform and are always
//! positive. A tracking request may carry either a site id or an
//! operator-chosen string alias; `SiteId::from_candidate` is how the
//! resolver tells the two apart.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Internal numeric identifier for a tracked site.
///
/// Invariant: always positive. Zero and negative values never name a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(u64);

impl SiteId {
    /// Creates a site id from a raw integer.
    ///
    /// Fails on zero: the platform never assigns id 0.
    pub fn new(raw: u64) -> Result<Self, Error> {
        if raw == 0 {
            return Err(Error::InvalidSiteId("site id must be positive".into()));
        }
        Ok(Self(raw))
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Parses a site id from a string, failing on anything that is not
    /// a positive integer.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let raw: u64 = s
            .parse()
            .map_err(|_| Error::InvalidSiteId(s.to_string()))?;
        Self::new(raw)
    }

    /// Lenient check used on the hot ingest path: `Some` when the
    /// candidate is already a positive integer (and therefore already a
    /// valid internal id), `None` when it needs alias translation.
    #[must_use]
    pub fn from_candidate(candidate: &str) -> Option<Self> {
        match candidate.parse::<u64>() {
            Ok(raw) if raw > 0 => Some(Self(raw)),
            _ => None,
        }
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SiteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
