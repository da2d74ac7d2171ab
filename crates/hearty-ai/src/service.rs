use hearty_common::{AIHealthReport, AppConfig, HealthSnapshot, ProviderKind};
use hearty_net::{CancellationToken, HttpNetworkClient, NetworkClient, OfflineNetworkClient};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{ConfigurationError, ReportError};
use crate::mock::mock_report;
use crate::registry::ProviderRegistry;

/// Single entry point for report generation.
///
/// Cheap to clone; clones share the same configuration and providers.
#[derive(Clone)]
pub struct ReportService {
    config: Arc<AppConfig>,
    registry: Arc<ProviderRegistry>,
}

impl ReportService {
    pub fn new(config: AppConfig, registry: ProviderRegistry) -> Self {
        Self { config: Arc::new(config), registry: Arc::new(registry) }
    }

    /// Builds a service whose built-in providers all use `network`.
    pub fn with_network(config: AppConfig, network: Arc<dyn NetworkClient>) -> Self {
        let registry = ProviderRegistry::with_backend(network, &config.network.report_path);
        Self::new(config, registry)
    }

    /// Builds a service with the network client implied by `config`: HTTP when
    /// a backend address is set, offline otherwise.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigurationError> {
        let network: Arc<dyn NetworkClient> = if config.has_backend() {
            let client = HttpNetworkClient::from_config(&config)
                .map_err(|e| ConfigurationError::InvalidBackend(e.to_string()))?;
            Arc::new(client)
        } else {
            warn!("No api_base_url configured, live reports will be unreachable");
            Arc::new(OfflineNetworkClient::new())
        };

        Ok(Self::with_network(config, network))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// The provider live requests would be routed to.
    pub fn active_provider(&self) -> Result<ProviderKind, ConfigurationError> {
        self.config
            .provider_kind()
            .map_err(|_| ConfigurationError::UnknownProvider(self.config.ai_provider.clone()))
    }

    /// Generates a report for `snapshot`.
    ///
    /// In mock mode this returns [`mock_report`] without any I/O. Otherwise the
    /// configured provider is called once; its failure is returned as-is, with
    /// no retry and no fallback to another provider.
    pub async fn generate_health_report(
        &self,
        snapshot: &HealthSnapshot,
        cancel: &CancellationToken,
    ) -> Result<AIHealthReport, ReportError> {
        if self.config.mock_mode {
            debug!("Mock mode enabled, returning built-in report");
            return Ok(mock_report());
        }

        let kind = self.active_provider()?;
        let provider =
            self.registry.get(kind).ok_or(ConfigurationError::UnregisteredProvider(kind))?;

        info!("Generating health report with {}", provider.get_name());

        match provider.generate(snapshot, cancel).await {
            Ok(report) => {
                debug!("{} returned report with {} risks", kind, report.risks().len());
                Ok(report)
            }
            Err(e) => {
                warn!("Health report generation failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// [`generate_health_report`](Self::generate_health_report) for callers that never cancel.
    pub async fn generate_health_report_uncancellable(
        &self,
        snapshot: &HealthSnapshot,
    ) -> Result<AIHealthReport, ReportError> {
        self.generate_health_report(snapshot, &CancellationToken::new()).await
    }
}
