pub mod generation;

pub use generation::{ConvertMacRequest, ConvertMacResponse};
