use fortimac_domain::MacAddress;

/// Finds MAC addresses inside free-form text.
pub trait MacExtractor: Send + Sync {
    /// Returns every address found, normalized, in the order it appears in `text`.
    ///
    /// Repeated addresses are returned once per occurrence.
    fn extract(&self, text: &str) -> Vec<MacAddress>;
}
