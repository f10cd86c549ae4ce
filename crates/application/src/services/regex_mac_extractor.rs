use fortimac_domain::MacAddress;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::ports::MacExtractor;

/// Six hex pairs, each of the first five followed by `:` or `-`.
/// Separator positions match independently, so `AA:BB-CC:DD-EE:FF` is accepted.
pub const MAC_PATTERN: &str = r"(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}";

static MAC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MAC_PATTERN).expect("MAC pattern is a valid regex"));

/// Regex-backed scanner for colon/hyphen delimited MAC addresses.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexMacExtractor;

impl RegexMacExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl MacExtractor for RegexMacExtractor {
    fn extract(&self, text: &str) -> Vec<MacAddress> {
        MAC_REGEX
            .find_iter(text)
            .map(|m| {
                let mac = MacAddress::normalize(m.as_str());
                debug!(raw = m.as_str(), normalized = %mac, offset = m.start(), "MAC address matched");
                mac
            })
            .collect()
    }
}
