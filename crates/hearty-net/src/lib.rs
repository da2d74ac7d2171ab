pub mod cancel;
pub mod error;
pub mod http;
pub mod offline;

pub use cancel::CancellationToken;
pub use error::{NetworkError, Result};
pub use http::HttpNetworkClient;
pub use offline::OfflineNetworkClient;

use async_trait::async_trait;
use serde_json::Value;

/// Transport used by report providers to reach the backend.
///
/// Implementations must stop work and return [`NetworkError::Cancelled`] once
/// `cancel` fires.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    async fn post(&self, path: &str, body: &Value, cancel: &CancellationToken) -> Result<Value>;
    fn get_name(&self) -> &'static str;
}
