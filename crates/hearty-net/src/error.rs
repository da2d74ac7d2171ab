use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Bad response from backend: {0}")]
    BadResponse(String),

    #[error("Backend does not implement {0}")]
    NotImplemented(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_decode() || err.is_body() {
            NetworkError::BadResponse(err.to_string())
        } else if err.is_builder() {
            NetworkError::Configuration(err.to_string())
        } else {
            NetworkError::Unreachable(err.to_string())
        }
    }
}
