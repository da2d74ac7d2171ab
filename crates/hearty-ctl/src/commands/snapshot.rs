use anyhow::{bail, Result};
use hearty_ai::ReportService;
use hearty_common::AppConfig;
use hearty_health::{DashboardModel, DashboardState, MockHealthSource};

pub async fn show(config: AppConfig) -> Result<()> {
    let service = ReportService::from_config(config)?;
    let mut dashboard = DashboardModel::new(MockHealthSource::new(), service);

    println!("Loading health data...");
    match dashboard.load_dashboard().await {
        DashboardState::Ready(_) => {}
        DashboardState::Unauthorized => bail!("Health data access was not granted"),
        DashboardState::Failed(reason) => bail!("Failed to load health data: {}", reason),
        DashboardState::Idle | DashboardState::Loading => bail!("Dashboard did not finish loading"),
    }

    println!();
    println!("{}", dashboard.header_date());
    println!("7-day averages");
    println!("─────────────────────────────────");
    for card in dashboard.metric_cards() {
        println!("  {:<20} {:>8} {}", card.title, card.value, card.unit);
    }

    Ok(())
}
