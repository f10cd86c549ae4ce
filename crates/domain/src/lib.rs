//! Fortimac Domain Layer
pub mod address_group;
pub mod config;
pub mod errors;
pub mod generation;
pub mod mac_address;

pub use address_group::AddressGroup;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use generation::{GenerationRequest, GenerationResult};
pub use mac_address::MacAddress;
