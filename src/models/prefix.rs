//! Network prefix model.

use std::fmt;

/// Three-octet network prefix, always ending with the separating dot.
///
/// Only [`Prefix::normalize`] produces values, so the trailing dot is an
/// invariant everywhere downstream. Octet contents are not validated;
/// degenerate prefixes flow through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    /// Normalize a raw prefix, appending the separating dot when missing.
    pub fn normalize(raw: &str) -> Prefix {
        if raw.ends_with('.') {
            Prefix(raw.to_string())
        } else {
            Prefix(format!("{raw}."))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dot-separated token of the prefix, used to label the report file.
    pub fn subnet_number(&self) -> &str {
        self.0
            .trim_end_matches('.')
            .rsplit('.')
            .next()
            .unwrap_or("")
    }

    /// Full host address for one final octet under this prefix.
    pub fn host(&self, octet: u8) -> String {
        format!("{}{}", self.0, octet)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
