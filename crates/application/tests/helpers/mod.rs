#![allow(dead_code)]

mod mock_extractor;

pub use mock_extractor::MockMacExtractor;
