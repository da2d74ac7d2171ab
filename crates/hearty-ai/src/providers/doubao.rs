use async_trait::async_trait;
use hearty_common::{AIHealthReport, HealthSnapshot, ProviderKind};
use hearty_net::{CancellationToken, NetworkClient};
use std::sync::Arc;
use tracing::debug;

use super::BackendRoute;
use crate::error::ProviderError;
use crate::ReportProvider;

/// Doubao, reached through the backend.
pub struct DoubaoProvider {
    backend: BackendRoute,
}

impl DoubaoProvider {
    pub fn new(network: Arc<dyn NetworkClient>, report_path: &str) -> Self {
        Self { backend: BackendRoute::new(network, report_path) }
    }
}

#[async_trait]
impl ReportProvider for DoubaoProvider {
    async fn generate(
        &self,
        snapshot: &HealthSnapshot,
        cancel: &CancellationToken,
    ) -> Result<AIHealthReport, ProviderError> {
        debug!("Generating health report through Doubao backend route");
        self.backend.request_report(self.kind(), snapshot, cancel).await
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Doubao
    }

    fn get_name(&self) -> &'static str {
        "Doubao"
    }
}
