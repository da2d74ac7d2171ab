use hearty_common::AIHealthReport;

/// The fixed report returned in mock mode.
pub fn mock_report() -> AIHealthReport {
    AIHealthReport::new(
        "Your overall health has remained stable over the past week.",
        vec!["Sleep duration is slightly below the recommended amount".to_string()],
        vec![
            "Try going to bed 30 minutes earlier".to_string(),
            "Keep up light daily exercise".to_string(),
        ],
        hearty_common::STANDARD_DISCLAIMER,
    )
}
