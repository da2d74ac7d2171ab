use hearty_ai::ReportError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthError {
    #[error("Health data access was not authorized")]
    Unauthorized,

    #[error("Health data unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("No health snapshot loaded")]
    NoSnapshot,

    #[error(transparent)]
    Report(#[from] ReportError),
}
