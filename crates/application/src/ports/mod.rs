mod mac_extractor;

pub use mac_extractor::MacExtractor;
