use std::sync::Arc;
use std::time::Duration;

use cucumber::World;
use hearty_ai::{AIHealthReport, CancellationToken, ReportError, ReportService};
use hearty_common::{AppConfig, HealthSnapshot};
use hearty_net::{HttpNetworkClient, NetworkClient, OfflineNetworkClient};

/// BDD World for report generation
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ReportWorld {
    /// Service configuration under test
    pub config: AppConfig,

    /// Backend address; `None` means no backend is configured
    pub backend_url: Option<String>,

    /// Snapshot handed to the service
    pub snapshot: Option<HealthSnapshot>,

    /// Outcome of the last report request
    pub outcome: Option<Result<AIHealthReport, ReportError>>,
}

impl ReportWorld {
    pub fn new() -> Self {
        Self { config: AppConfig::default(), backend_url: None, snapshot: None, outcome: None }
    }

    pub async fn request_report(&mut self) {
        let network: Arc<dyn NetworkClient> = match &self.backend_url {
            Some(url) => Arc::new(
                HttpNetworkClient::new(url, Duration::from_secs(2), None)
                    .expect("test backend client should build"),
            ),
            None => Arc::new(OfflineNetworkClient::new()),
        };

        let service = ReportService::with_network(self.config.clone(), network);
        let snapshot = self.snapshot.clone().expect("a snapshot must be given first");

        self.outcome =
            Some(service.generate_health_report(&snapshot, &CancellationToken::new()).await);
    }
}

impl Default for ReportWorld {
    fn default() -> Self {
        Self::new()
    }
}
