pub mod adapter_error;
pub use adapter_error::*;

pub mod adapter_config;
pub use adapter_config::*;
