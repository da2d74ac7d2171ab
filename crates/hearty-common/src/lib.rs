pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::{AppConfig, ProviderKind};
pub use error::{Error, Result};
pub use types::*;
