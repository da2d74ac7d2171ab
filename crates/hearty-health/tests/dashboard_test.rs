use hearty_ai::{mock_report, CancellationToken, ProviderError, ReportError, ReportService};
use hearty_common::AppConfig;
use hearty_health::{DashboardError, DashboardModel, DashboardState, MockHealthSource};
use hearty_net::OfflineNetworkClient;
use std::sync::Arc;
use std::time::Duration;

fn service(mock_mode: bool) -> ReportService {
    let config = AppConfig { mock_mode, ..AppConfig::default() };
    ReportService::with_network(config, Arc::new(OfflineNetworkClient::new()))
}

fn instant_source() -> MockHealthSource {
    MockHealthSource::new().with_latency(Duration::ZERO)
}

#[tokio::test]
async fn test_dashboard_starts_idle() {
    let dashboard = DashboardModel::new(instant_source(), service(true));

    assert_eq!(dashboard.state(), &DashboardState::Idle);
    assert!(dashboard.snapshot().is_none());
    assert!(dashboard.metric_cards().is_empty());
    assert!(!dashboard.header_date().is_empty());
}

#[tokio::test]
async fn test_load_then_generate_mock_report() {
    let mut dashboard = DashboardModel::new(instant_source(), service(true));

    let state = dashboard.load_dashboard().await;
    assert!(matches!(state, DashboardState::Ready(_)));
    assert_eq!(dashboard.metric_cards().len(), 6);

    let report = dashboard.generate_report(&CancellationToken::new()).await.unwrap().clone();
    assert_eq!(report, mock_report());
    assert_eq!(dashboard.report(), Some(&report));
}

#[tokio::test]
async fn test_reload_discards_previous_report() {
    let mut dashboard = DashboardModel::new(instant_source(), service(true));
    dashboard.load_dashboard().await;
    dashboard.generate_report(&CancellationToken::new()).await.unwrap();

    dashboard.load_dashboard().await;
    assert!(dashboard.report().is_none());
}

#[tokio::test]
async fn test_denied_access_is_unauthorized() {
    let mut dashboard = DashboardModel::new(instant_source().denying_access(), service(true));

    assert_eq!(dashboard.load_dashboard().await, &DashboardState::Unauthorized);

    let result = dashboard.generate_report(&CancellationToken::new()).await;
    assert_eq!(result.unwrap_err(), DashboardError::NoSnapshot);
}

#[tokio::test]
async fn test_live_failure_surfaces_provider_error() {
    let mut dashboard = DashboardModel::new(instant_source(), service(false));
    dashboard.load_dashboard().await;

    let result = dashboard.generate_report(&CancellationToken::new()).await;

    assert!(matches!(
        result,
        Err(DashboardError::Report(ReportError::Provider(ProviderError::Unreachable(..))))
    ));
    assert!(dashboard.report().is_none());
}
