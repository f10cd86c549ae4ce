use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("MacAddressList is empty.")]
    EmptyInput,

    #[error("No valid MAC addresses found.")]
    NoValidMacFound,

    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),
}
