use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Disclaimer attached to every report when no other one is supplied.
pub const STANDARD_DISCLAIMER: &str =
    "This report is for health-management reference only and does not constitute medical advice.";

/// Aggregated health metrics over a trailing seven-day window.
///
/// This is the only format exchanged between data acquisition, the dashboard
/// and report generation. It must never carry platform-specific health types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    /// When the snapshot was captured
    pub date: DateTime<Utc>,

    /// Average daily step count
    pub steps_avg_7d: f64,
    /// Average daily distance in kilometres
    pub distance_avg_7d: f64,
    /// Average daily active energy burn in kilocalories
    pub active_calories_avg_7d: f64,

    /// Resting heart rate in beats per minute
    pub resting_heart_rate: f64,
    /// Average nightly sleep in hours
    pub sleep_avg_hours: f64,

    /// Dimensionless stress score, nominally 0-100
    pub stress_score: i32,
}

/// A field of a [`HealthSnapshot`] that falls outside its documented range.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotIssue {
    pub field: &'static str,
    pub value: f64,
    pub expected: &'static str,
}

impl HealthSnapshot {
    /// Reports fields outside their documented ranges.
    ///
    /// Construction never calls this; range checks are left to callers that
    /// need them.
    pub fn validate(&self) -> Vec<SnapshotIssue> {
        let mut issues = Vec::new();

        let non_negative = [
            ("stepsAvg7d", self.steps_avg_7d),
            ("distanceAvg7d", self.distance_avg_7d),
            ("activeCaloriesAvg7d", self.active_calories_avg_7d),
            ("sleepAvgHours", self.sleep_avg_hours),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                issues.push(SnapshotIssue { field, value, expected: ">= 0" });
            }
        }

        if self.resting_heart_rate.is_nan() || self.resting_heart_rate <= 0.0 {
            issues.push(SnapshotIssue {
                field: "restingHeartRate",
                value: self.resting_heart_rate,
                expected: "> 0",
            });
        }

        if !(0..=100).contains(&self.stress_score) {
            issues.push(SnapshotIssue {
                field: "stressScore",
                value: f64::from(self.stress_score),
                expected: "0-100",
            });
        }

        issues
    }
}

/// An AI-generated health report.
///
/// Fields are read-only; the disclaimer is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReportFields")]
pub struct AIHealthReport {
    summary: String,
    risks: Vec<String>,
    suggestions: Vec<String>,
    disclaimer: String,
}

#[derive(Deserialize)]
struct ReportFields {
    summary: String,
    #[serde(default)]
    risks: Vec<String>,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    disclaimer: String,
}

impl TryFrom<ReportFields> for AIHealthReport {
    type Error = Error;

    fn try_from(fields: ReportFields) -> Result<Self, Self::Error> {
        Self::with_disclaimer(fields.summary, fields.risks, fields.suggestions, fields.disclaimer)
    }
}

impl AIHealthReport {
    /// Builds a report, falling back to [`STANDARD_DISCLAIMER`] when `disclaimer` is blank.
    pub fn new(
        summary: impl Into<String>,
        risks: Vec<String>,
        suggestions: Vec<String>,
        disclaimer: impl Into<String>,
    ) -> Self {
        let disclaimer = disclaimer.into();
        let disclaimer = if disclaimer.trim().is_empty() {
            STANDARD_DISCLAIMER.to_string()
        } else {
            disclaimer
        };

        Self { summary: summary.into(), risks, suggestions, disclaimer }
    }

    /// Builds a report, rejecting a blank disclaimer instead of substituting one.
    pub fn with_disclaimer(
        summary: impl Into<String>,
        risks: Vec<String>,
        suggestions: Vec<String>,
        disclaimer: impl Into<String>,
    ) -> Result<Self, Error> {
        let disclaimer = disclaimer.into();
        if disclaimer.trim().is_empty() {
            return Err(Error::EmptyDisclaimer);
        }

        Ok(Self { summary: summary.into(), risks, suggestions, disclaimer })
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Risk statements in presentation order.
    pub fn risks(&self) -> &[String] {
        &self.risks
    }

    /// Suggestions in presentation order.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn disclaimer(&self) -> &str {
        &self.disclaimer
    }
}
