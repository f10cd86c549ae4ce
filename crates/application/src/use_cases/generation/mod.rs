mod generate_script;

pub use generate_script::GenerateScriptUseCase;
