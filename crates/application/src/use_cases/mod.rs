pub mod generation;

// Re-export use cases
pub use generation::GenerateScriptUseCase;
