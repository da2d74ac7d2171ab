use chrono::Utc;
use hearty_ai::{AIHealthReport, CancellationToken, ReportService};
use hearty_common::format::format_long_date;
use hearty_common::HealthSnapshot;
use tracing::{info, warn};

use crate::error::{DashboardError, HealthError};
use crate::source::HealthDataSource;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Idle,
    Loading,
    Ready(HealthSnapshot),
    Unauthorized,
    Failed(String),
}

/// One tile on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub unit: &'static str,
}

pub fn metric_cards(snapshot: &HealthSnapshot) -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Steps",
            value: format!("{:.0}", snapshot.steps_avg_7d),
            unit: "steps/day",
        },
        MetricCard {
            title: "Distance",
            value: format!("{:.1}", snapshot.distance_avg_7d),
            unit: "km/day",
        },
        MetricCard {
            title: "Active Energy",
            value: format!("{:.0}", snapshot.active_calories_avg_7d),
            unit: "kcal/day",
        },
        MetricCard {
            title: "Resting Heart Rate",
            value: format!("{:.0}", snapshot.resting_heart_rate),
            unit: "bpm",
        },
        MetricCard {
            title: "Sleep",
            value: format!("{:.1}", snapshot.sleep_avg_hours),
            unit: "h/night",
        },
        MetricCard { title: "Stress", value: snapshot.stress_score.to_string(), unit: "/100" },
    ]
}

/// Presentation state behind the dashboard screen.
pub struct DashboardModel<S: HealthDataSource> {
    source: S,
    service: ReportService,
    state: DashboardState,
    report: Option<AIHealthReport>,
}

impl<S: HealthDataSource> DashboardModel<S> {
    pub fn new(source: S, service: ReportService) -> Self {
        Self { source, service, state: DashboardState::Idle, report: None }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&HealthSnapshot> {
        match &self.state {
            DashboardState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&AIHealthReport> {
        self.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == DashboardState::Loading
    }

    /// Header date: the snapshot's capture date once loaded, today before that.
    pub fn header_date(&self) -> String {
        match self.snapshot() {
            Some(snapshot) => format_long_date(&snapshot.date),
            None => format_long_date(&Utc::now()),
        }
    }

    pub fn metric_cards(&self) -> Vec<MetricCard> {
        self.snapshot().map(metric_cards).unwrap_or_default()
    }

    /// Authorize against the data source and load a fresh snapshot.
    ///
    /// Any previously generated report is discarded.
    pub async fn load_dashboard(&mut self) -> &DashboardState {
        self.state = DashboardState::Loading;
        self.report = None;

        if !self.source.request_authorization().await {
            warn!("{} health source denied access", self.source.get_name());
            self.state = DashboardState::Unauthorized;
            return &self.state;
        }

        self.state = match self.source.aggregate_snapshot().await {
            Ok(snapshot) => {
                info!("Dashboard loaded snapshot captured at {}", snapshot.date);
                DashboardState::Ready(snapshot)
            }
            Err(HealthError::Unauthorized) => DashboardState::Unauthorized,
            Err(e) => {
                warn!("Failed to load health snapshot: {}", e);
                DashboardState::Failed(e.to_string())
            }
        };

        &self.state
    }

    /// Generate a report for the loaded snapshot and keep it until the next load.
    pub async fn generate_report(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<&AIHealthReport, DashboardError> {
        let snapshot = self.snapshot().ok_or(DashboardError::NoSnapshot)?;
        let report = self.service.generate_health_report(snapshot, cancel).await?;
        Ok(&*self.report.insert(report))
    }
}
