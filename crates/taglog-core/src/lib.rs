//! taglog Core - Shared configuration, process identity and error handling

pub mod config;
pub mod constants;
pub mod error;
pub mod identity;

pub use config::{ConfigFormat, LogConfig};
pub use error::{Error, Result};
pub use identity::{sanitize_user, short_hostname, Identity};
