use async_trait::async_trait;
use hearty_common::{AIHealthReport, HealthSnapshot, ProviderKind};
use hearty_net::{CancellationToken, NetworkClient};
use std::sync::Arc;
use tracing::debug;

use super::BackendRoute;
use crate::error::ProviderError;
use crate::ReportProvider;

/// Routes report generation to the backend's OpenAI integration.
pub struct OpenAiProvider {
    backend: BackendRoute,
}

impl OpenAiProvider {
    pub fn new(network: Arc<dyn NetworkClient>, report_path: &str) -> Self {
        Self { backend: BackendRoute::new(network, report_path) }
    }
}

#[async_trait]
impl ReportProvider for OpenAiProvider {
    async fn generate(
        &self,
        snapshot: &HealthSnapshot,
        cancel: &CancellationToken,
    ) -> Result<AIHealthReport, ProviderError> {
        debug!("Generating health report through OpenAI backend route");
        self.backend.request_report(self.kind(), snapshot, cancel).await
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn get_name(&self) -> &'static str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use hearty_net::NetworkError;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct RecordingNetwork {
        seen: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl NetworkClient for RecordingNetwork {
        async fn post(
            &self,
            path: &str,
            body: &Value,
            _cancel: &CancellationToken,
        ) -> Result<Value, NetworkError> {
            self.seen.lock().unwrap().push((path.to_string(), body.clone()));
            Ok(json!({
                "report": {
                    "summary": "Steady week.",
                    "risks": [],
                    "suggestions": ["Walk after dinner"],
                    "disclaimer": "Not medical advice."
                }
            }))
        }

        fn get_name(&self) -> &'static str {
            "Recording"
        }
    }

    #[tokio::test]
    async fn test_openai_provider_posts_to_backend_route() {
        let network = Arc::new(RecordingNetwork { seen: Mutex::new(Vec::new()) });
        let provider = OpenAiProvider::new(network.clone(), "/ai/health-report");
        assert_eq!(provider.get_name(), "OpenAI");
        assert_eq!(provider.kind(), ProviderKind::OpenAi);

        let snapshot = HealthSnapshot {
            date: Utc::now(),
            steps_avg_7d: 7600.0,
            distance_avg_7d: 5.2,
            active_calories_avg_7d: 520.0,
            resting_heart_rate: 61.0,
            sleep_avg_hours: 6.3,
            stress_score: 18,
        };
        let report = provider.generate(&snapshot, &CancellationToken::new()).await.unwrap();

        assert_eq!(report.summary(), "Steady week.");
        assert_eq!(report.suggestions(), ["Walk after dinner".to_string()]);

        let seen = network.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "/ai/health-report");
        assert_eq!(seen[0].1["provider"], "openAI");
        assert_eq!(seen[0].1["snapshot"]["stepsAvg7d"], 7600.0);
    }
}
