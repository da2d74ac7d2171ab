use chrono::Utc;
use cucumber::{given, then, when, World};
use hearty_ai::{mock_report, ProviderKind, ReportError};
use hearty_bdd::ReportWorld;
use hearty_common::HealthSnapshot;
use hearty_health::sample_snapshot;

#[given("the dashboard snapshot")]
async fn dashboard_snapshot(world: &mut ReportWorld) {
    world.snapshot = Some(sample_snapshot(Utc::now()));
}

#[given(regex = r"^a snapshot with (\d+) steps, ([\d.]+) hours of sleep and stress (\d+)$")]
async fn boundary_snapshot(world: &mut ReportWorld, steps: f64, sleep: f64, stress: i32) {
    world.snapshot = Some(HealthSnapshot {
        steps_avg_7d: steps,
        sleep_avg_hours: sleep,
        stress_score: stress,
        ..sample_snapshot(Utc::now())
    });
}

#[given("the service is in mock mode")]
async fn mock_mode(world: &mut ReportWorld) {
    world.config.mock_mode = true;
}

#[given(expr = "the service is in live mode using provider {string}")]
async fn live_mode(world: &mut ReportWorld, provider: String) {
    world.config.mock_mode = false;
    world.config.ai_provider = provider;
}

#[given("the backend is unreachable")]
async fn backend_unreachable(world: &mut ReportWorld) {
    // Bind then release a port so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    world.backend_url = Some(format!("http://{}", addr));
}

#[when("a health report is requested")]
async fn request_report(world: &mut ReportWorld) {
    world.request_report().await;
}

#[then("the mock report is returned")]
async fn mock_report_returned(world: &mut ReportWorld) {
    let outcome = world.outcome.as_ref().expect("no report requested");
    assert_eq!(outcome.as_ref().unwrap(), &mock_report());
}

#[then("the report has a summary, risks, suggestions and a disclaimer")]
async fn report_complete(world: &mut ReportWorld) {
    let report = world.outcome.as_ref().unwrap().as_ref().unwrap();
    assert!(!report.summary().is_empty());
    assert!(!report.risks().is_empty());
    assert!(!report.suggestions().is_empty());
    assert!(!report.disclaimer().is_empty());
}

#[then(expr = "the request fails with a retryable provider error for {string}")]
async fn provider_error(world: &mut ReportWorld, provider: String) {
    let expected: ProviderKind = provider.parse().unwrap();

    let err = match world.outcome.as_ref().expect("no report requested") {
        Err(err) => err,
        Ok(report) => panic!("expected provider error, got report {:?}", report),
    };

    match err {
        ReportError::Provider(provider_err) => assert_eq!(provider_err.provider(), expected),
        other => panic!("expected provider error, got {:?}", other),
    }
    assert!(err.is_retryable());
}

#[then("the request fails with a configuration error")]
async fn configuration_error(world: &mut ReportWorld) {
    let outcome = world.outcome.as_ref().expect("no report requested");
    assert!(matches!(outcome, Err(ReportError::Configuration(_))));
}

#[tokio::main]
async fn main() {
    ReportWorld::cucumber().fail_on_skipped().run_and_exit("tests/features").await;
}
