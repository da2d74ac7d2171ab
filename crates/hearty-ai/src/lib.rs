pub mod error;
pub mod mock;
pub mod protocol;
pub mod providers;
pub mod registry;
pub mod service;

pub use error::{ConfigurationError, ProviderError, ReportError};
pub use mock::mock_report;
pub use registry::{create_provider, ProviderRegistry};
pub use service::ReportService;

pub use hearty_common::{AIHealthReport, HealthSnapshot, ProviderKind};
pub use hearty_net::CancellationToken;

use async_trait::async_trait;

/// A backend able to turn a health snapshot into a report.
///
/// Adapters are stateless with respect to request data, so one instance may
/// serve any number of concurrent calls.
#[async_trait]
pub trait ReportProvider: Send + Sync {
    async fn generate(
        &self,
        snapshot: &HealthSnapshot,
        cancel: &CancellationToken,
    ) -> Result<AIHealthReport, ProviderError>;
    fn kind(&self) -> ProviderKind;
    fn get_name(&self) -> &'static str;
}
