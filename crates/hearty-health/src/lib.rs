pub mod dashboard;
pub mod error;
pub mod source;

pub use dashboard::{metric_cards, DashboardModel, DashboardState, MetricCard};
pub use error::{DashboardError, HealthError};
pub use source::{sample_snapshot, HealthDataSource, MockHealthSource};
