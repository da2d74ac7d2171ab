use anyhow::{bail, Result};
use hearty_ai::{AIHealthReport, CancellationToken, ReportService};
use hearty_common::AppConfig;
use hearty_health::{DashboardModel, DashboardState, MockHealthSource};
use tracing::{debug, warn};

/// Generate a report for the mock dashboard snapshot. Ctrl-C cancels an in-flight request.
pub async fn generate(
    mut config: AppConfig,
    live: bool,
    provider: Option<String>,
    json: bool,
) -> Result<()> {
    if live {
        config.mock_mode = false;
    }
    if let Some(provider) = provider {
        config.ai_provider = provider;
    }

    let service = ReportService::from_config(config)?;
    let mut dashboard = DashboardModel::new(MockHealthSource::new(), service);

    if !matches!(dashboard.load_dashboard().await, DashboardState::Ready(_)) {
        bail!("No health snapshot available: {:?}", dashboard.state());
    }

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling report request");
            trigger.cancel();
        }
    });

    let result = dashboard.generate_report(&cancel).await.cloned();
    interrupt.abort();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            warn!("Report generation failed: {}", e);
            bail!("Failed to generate health report: {}", e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AIHealthReport) {
    println!();
    println!("AI Health Report");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("{}", report.summary());

    if !report.risks().is_empty() {
        println!();
        println!("Risks:");
        for (i, risk) in report.risks().iter().enumerate() {
            println!("  {}. {}", i + 1, risk);
        }
    }

    if !report.suggestions().is_empty() {
        println!();
        println!("Suggestions:");
        for (i, suggestion) in report.suggestions().iter().enumerate() {
            println!("  {}. {}", i + 1, suggestion);
        }
    }

    println!();
    println!("{}", report.disclaimer());
}
