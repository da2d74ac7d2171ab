use hearty_common::ProviderKind;
use hearty_net::NetworkError;
use thiserror::Error;

/// The service configuration does not resolve to a usable provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Unknown AI provider: {0:?}")]
    UnknownProvider(String),

    #[error("AI provider {0} is not registered")]
    UnregisteredProvider(ProviderKind),

    #[error("Invalid backend configuration: {0}")]
    InvalidBackend(String),
}

/// A provider failed to produce a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0} backend unreachable: {1}")]
    Unreachable(ProviderKind, String),

    #[error("{0} backend returned a malformed response: {1}")]
    MalformedResponse(ProviderKind, String),

    #[error("{0} backend timed out")]
    Timeout(ProviderKind),

    #[error("{0} report request cancelled")]
    Cancelled(ProviderKind),

    #[error("{0} is not implemented by the backend")]
    NotImplemented(ProviderKind),

    #[error("Could not encode {0} report request: {1}")]
    InvalidRequest(ProviderKind, String),
}

impl ProviderError {
    pub fn from_network(provider: ProviderKind, err: NetworkError) -> Self {
        match err {
            NetworkError::Unreachable(reason) => ProviderError::Unreachable(provider, reason),
            NetworkError::Configuration(reason) => ProviderError::Unreachable(provider, reason),
            NetworkError::BadResponse(reason) => ProviderError::MalformedResponse(provider, reason),
            NetworkError::NotImplemented(_) => ProviderError::NotImplemented(provider),
            NetworkError::Timeout => ProviderError::Timeout(provider),
            NetworkError::Cancelled => ProviderError::Cancelled(provider),
        }
    }

    pub fn provider(&self) -> ProviderKind {
        match self {
            ProviderError::Unreachable(kind, _)
            | ProviderError::MalformedResponse(kind, _)
            | ProviderError::Timeout(kind)
            | ProviderError::Cancelled(kind)
            | ProviderError::NotImplemented(kind)
            | ProviderError::InvalidRequest(kind, _) => *kind,
        }
    }
}

/// Everything [`ReportService`](crate::ReportService) can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl ReportError {
    /// Whether offering the user a retry makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ReportError::Provider(ProviderError::Timeout(_) | ProviderError::Unreachable(..))
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ReportError::Provider(ProviderError::Timeout(_)))
    }
}
