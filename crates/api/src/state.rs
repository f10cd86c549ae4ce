use fortimac_application::use_cases::GenerateScriptUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub generate_script: Arc<GenerateScriptUseCase>,
}

impl AppState {
    pub fn new(generate_script: Arc<GenerateScriptUseCase>) -> Self {
        Self { generate_script }
    }
}
