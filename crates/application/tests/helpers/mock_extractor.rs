use fortimac_application::ports::MacExtractor;
use fortimac_domain::MacAddress;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Mock MacExtractor
// ============================================================================

/// Returns a fixed set of addresses and counts how often it was asked.
pub struct MockMacExtractor {
    macs: Vec<MacAddress>,
    calls: AtomicUsize,
}

impl MockMacExtractor {
    pub fn returning(macs: &[&str]) -> Self {
        Self {
            macs: macs.iter().map(|m| MacAddress::normalize(m)).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::returning(&[])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MacExtractor for MockMacExtractor {
    fn extract(&self, _text: &str) -> Vec<MacAddress> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.macs.clone()
    }
}
