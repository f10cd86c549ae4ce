mod regex_mac_extractor;
mod script_renderer;

pub use regex_mac_extractor::RegexMacExtractor;
pub use script_renderer::ScriptRenderer;
