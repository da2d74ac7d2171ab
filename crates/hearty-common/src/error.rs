use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Report disclaimer must not be empty")]
    EmptyDisclaimer,

    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
