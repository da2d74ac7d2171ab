//! JSON bodies exchanged with the report backend.

use hearty_common::{AIHealthReport, HealthSnapshot, ProviderKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current protocol version.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Body POSTed to the backend report endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportRequest<'a> {
    pub version: &'static str,
    /// Unique request ID for tracing.
    pub request_id: Uuid,
    /// Backend the server should route the prompt to.
    pub provider: &'static str,
    pub snapshot: &'a HealthSnapshot,
}

impl<'a> HealthReportRequest<'a> {
    pub fn new(provider: ProviderKind, snapshot: &'a HealthSnapshot) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            request_id: Uuid::new_v4(),
            provider: provider.config_name(),
            snapshot,
        }
    }
}

/// Body returned by the backend on success.
#[derive(Debug, Deserialize)]
pub struct HealthReportResponse {
    pub report: AIHealthReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_request_carries_full_snapshot() {
        let snapshot = HealthSnapshot {
            date: Utc::now(),
            steps_avg_7d: 0.0,
            distance_avg_7d: 0.0,
            active_calories_avg_7d: 0.0,
            resting_heart_rate: 55.0,
            sleep_avg_hours: 0.0,
            stress_score: 100,
        };

        let value = serde_json::to_value(HealthReportRequest::new(ProviderKind::Doubao, &snapshot))
            .unwrap();

        assert_eq!(value["version"], PROTOCOL_VERSION);
        assert_eq!(value["provider"], "doubao");
        assert!(value["requestId"].is_string());
        assert_eq!(value["snapshot"]["restingHeartRate"], 55.0);
        assert_eq!(value["snapshot"]["stressScore"], 100);
    }
}
