//! Syntactic IPv4 address type
//!
//! Addresses are kept as the exact text the IP check service returned.
//! Only the shape is checked: four dot-separated groups of one to three ASCII
//! digits. Octet ranges are not validated, so `999.999.999.999` is accepted.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static IPV4_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}(?:\.[0-9]{1,3}){3}$").expect("IPv4 pattern is valid")
});

/// Check whether `text` is a syntactically valid IPv4 address.
///
/// The match is anchored: surrounding whitespace or trailing garbage fails.
pub fn is_valid_syntax(text: &str) -> bool {
    IPV4_SYNTAX.is_match(text)
}

/// An IPv4 address that passed syntax validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Address(String);

impl Ipv4Address {
    /// Validate `text` and wrap it
    ///
    /// `text` is taken as-is; callers trim response bodies and cache lines first.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if is_valid_syntax(&text) {
            Ok(Self(text))
        } else {
            Err(Error::InvalidAddress(text))
        }
    }

    /// The address text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ipv4Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ipv4Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
