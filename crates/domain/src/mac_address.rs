use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Length of `XX:XX:XX:XX:XX:XX`.
const MAC_TEXT_LEN: usize = 17;

/// A MAC address in canonical `XX:XX:XX:XX:XX:XX` form (uppercase hex, colon separated).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Normalizes a matched token: hyphens become colons and hex letters are uppercased.
    ///
    /// The caller must hand in a well-formed six-octet token (checked in debug builds);
    /// use [`MacAddress::from_str`] when the input has not been matched yet.
    pub fn normalize(raw: &str) -> Self {
        debug_assert!(
            Self::is_well_formed(raw),
            "normalize called with a non-MAC token: {raw:?}"
        );
        let normalized = if raw.contains('-') {
            raw.replace('-', ":")
        } else {
            raw.to_string()
        };
        Self(normalized.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for six hex pairs where every separator is `:` or `-`, mixed or not.
    pub fn is_well_formed(raw: &str) -> bool {
        if raw.len() != MAC_TEXT_LEN {
            return false;
        }

        raw.bytes().enumerate().all(|(i, b)| {
            if i % 3 == 2 {
                b == b':' || b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
    }
}

impl FromStr for MacAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !Self::is_well_formed(trimmed) {
            return Err(DomainError::InvalidMacAddress(s.to_string()));
        }
        Ok(Self::normalize(trimmed))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}
