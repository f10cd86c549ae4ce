use fortimac_domain::{DomainError, GenerationRequest, GenerationResult};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::MacExtractor;
use crate::services::{RegexMacExtractor, ScriptRenderer};

/// Turns pasted text into a firewall address script.
///
/// Stateless: each call only touches request-scoped values, so a single
/// instance can be shared across concurrent requests.
pub struct GenerateScriptUseCase {
    extractor: Arc<dyn MacExtractor>,
    renderer: ScriptRenderer,
}

impl GenerateScriptUseCase {
    pub fn new(extractor: Arc<dyn MacExtractor>) -> Self {
        Self {
            extractor,
            renderer: ScriptRenderer::new(),
        }
    }

    /// Validates the input, extracts and normalizes addresses, then renders the script.
    ///
    /// # Errors
    ///
    /// * `DomainError::EmptyInput` - the address list is empty or whitespace only
    /// * `DomainError::NoValidMacFound` - no six-octet token was found in the text
    #[instrument(skip_all, fields(fortigate = %request.fortigate_name, group_choice = request.group_choice))]
    pub fn execute(&self, request: &GenerationRequest) -> Result<GenerationResult, DomainError> {
        if request.mac_address_list.trim().is_empty() {
            debug!("Rejected request with empty address list");
            return Err(DomainError::EmptyInput);
        }

        let macs = self.extractor.extract(&request.mac_address_list);
        if macs.is_empty() {
            debug!(
                input_len = request.mac_address_list.len(),
                "No MAC addresses found in input"
            );
            return Err(DomainError::NoValidMacFound);
        }

        let group = request.group();
        info!(count = macs.len(), group = %group, "Found valid MAC addresses");

        let script = self
            .renderer
            .render(group, &request.fortigate_name, &macs);

        Ok(GenerationResult::new(script, macs))
    }
}

impl Default for GenerateScriptUseCase {
    fn default() -> Self {
        Self::new(Arc::new(RegexMacExtractor::new()))
    }
}
