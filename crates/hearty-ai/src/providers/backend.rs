use hearty_common::{AIHealthReport, HealthSnapshot, ProviderKind};
use hearty_net::{CancellationToken, NetworkClient};
use std::sync::Arc;
use tracing::debug;

use crate::error::ProviderError;
use crate::protocol::{HealthReportRequest, HealthReportResponse};

/// The backend endpoint every provider adapter talks to.
///
/// Vendor credentials and prompts live on the backend; adapters only name the
/// vendor the backend should route to.
#[derive(Clone)]
pub struct BackendRoute {
    network: Arc<dyn NetworkClient>,
    path: String,
}

impl BackendRoute {
    pub fn new(network: Arc<dyn NetworkClient>, path: &str) -> Self {
        Self { network, path: path.to_string() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn request_report(
        &self,
        provider: ProviderKind,
        snapshot: &HealthSnapshot,
        cancel: &CancellationToken,
    ) -> Result<AIHealthReport, ProviderError> {
        let request = HealthReportRequest::new(provider, snapshot);
        let request_id = request.request_id;
        let body = serde_json::to_value(&request)
            .map_err(|e| ProviderError::InvalidRequest(provider, e.to_string()))?;

        debug!(
            "Requesting {} report via {} {} (request {})",
            provider,
            self.network.get_name(),
            self.path,
            request_id
        );

        let response = self
            .network
            .post(&self.path, &body, cancel)
            .await
            .map_err(|e| ProviderError::from_network(provider, e))?;

        let decoded: HealthReportResponse = serde_json::from_value(response)
            .map_err(|e| ProviderError::MalformedResponse(provider, e.to_string()))?;

        debug!("Received {} report (request {})", provider, request_id);
        Ok(decoded.report)
    }
}
