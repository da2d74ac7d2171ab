use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hearty_common::HealthSnapshot;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::HealthError;

/// Device health data, already aggregated into the vendor-neutral snapshot.
///
/// Implementations wrap a platform health store. They do no aggregation of
/// their own beyond producing a [`HealthSnapshot`], and upload nothing.
#[async_trait]
pub trait HealthDataSource: Send + Sync {
    /// Ask the user for read access. Returns whether access was granted.
    async fn request_authorization(&self) -> bool;

    async fn aggregate_snapshot(&self) -> Result<HealthSnapshot, HealthError>;

    fn get_name(&self) -> &'static str;
}

/// The snapshot shown on the dashboard before a real health store is wired in.
pub fn sample_snapshot(date: DateTime<Utc>) -> HealthSnapshot {
    HealthSnapshot {
        date,
        steps_avg_7d: 7600.0,
        distance_avg_7d: 5.2,
        active_calories_avg_7d: 520.0,
        resting_heart_rate: 61.0,
        sleep_avg_hours: 6.3,
        stress_score: 18,
    }
}

/// Source returning [`sample_snapshot`] after a simulated load delay.
pub struct MockHealthSource {
    grants_access: bool,
    latency: Duration,
    authorized: AtomicBool,
}

impl MockHealthSource {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self {
            grants_access: true,
            latency: Self::DEFAULT_LATENCY,
            authorized: AtomicBool::new(false),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// A source whose authorization prompt is always declined.
    pub fn denying_access(mut self) -> Self {
        self.grants_access = false;
        self
    }
}

impl Default for MockHealthSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthDataSource for MockHealthSource {
    async fn request_authorization(&self) -> bool {
        debug!("Mock authorization request, granting: {}", self.grants_access);
        self.authorized.store(self.grants_access, Ordering::SeqCst);
        self.grants_access
    }

    async fn aggregate_snapshot(&self) -> Result<HealthSnapshot, HealthError> {
        if !self.authorized.load(Ordering::SeqCst) {
            return Err(HealthError::Unauthorized);
        }

        tokio::time::sleep(self.latency).await;

        info!("Produced mock health snapshot");
        Ok(sample_snapshot(Utc::now()))
    }

    fn get_name(&self) -> &'static str {
        "Mock"
    }
}
