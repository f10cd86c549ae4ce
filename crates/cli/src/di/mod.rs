use fortimac_api::AppState;
use fortimac_application::services::RegexMacExtractor;
use fortimac_application::use_cases::GenerateScriptUseCase;
use std::sync::Arc;

pub struct UseCases {
    pub generate_script: Arc<GenerateScriptUseCase>,
}

impl UseCases {
    pub fn new() -> Self {
        let extractor = Arc::new(RegexMacExtractor::new());
        Self {
            generate_script: Arc::new(GenerateScriptUseCase::new(extractor)),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(Arc::clone(&self.generate_script))
    }
}

impl Default for UseCases {
    fn default() -> Self {
        Self::new()
    }
}
