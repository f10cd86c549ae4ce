pub mod convert;
pub mod health;

pub use convert::convert_mac_address;
pub use health::health_check;
