use crate::{CancellationToken, NetworkClient, NetworkError, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Client used when no backend address is configured. Every request fails
/// with [`NetworkError::Unreachable`].
#[derive(Debug, Default, Clone)]
pub struct OfflineNetworkClient;

impl OfflineNetworkClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NetworkClient for OfflineNetworkClient {
    async fn post(&self, path: &str, _body: &Value, cancel: &CancellationToken) -> Result<Value> {
        if cancel.is_cancelled() {
            return Err(NetworkError::Cancelled);
        }

        debug!("Offline client refusing POST {}", path);
        Err(NetworkError::Unreachable(format!("no backend configured for {}", path)))
    }

    fn get_name(&self) -> &'static str {
        "Offline"
    }
}
