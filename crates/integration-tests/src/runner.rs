//! Session-per-scenario execution and the run report.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{error, info, warn};
use vamshop_e2e_browser::{Session, WebDriverBrowser};

use crate::context::TestContext;
use crate::error::ScenarioError;
use crate::scenarios::Scenario;

/// Run `scenario` in a fresh WebDriver session.
///
/// # Errors
///
/// Returns a browser error if the session cannot be opened, otherwise see
/// [`run_in_session`].
pub async fn run_scenario(ctx: &TestContext, scenario: Scenario) -> Result<(), ScenarioError> {
    info!(%scenario, "Starting scenario");
    let browser = WebDriverBrowser::connect(&ctx.config().webdriver).await?;
    run_in_session(browser, ctx, scenario).await
}

/// Run `scenario` against `session`, then close it.
///
/// The session is closed whether the scenario passed or not. A scenario
/// failure takes precedence over a failure to close the session.
///
/// # Errors
///
/// Returns the scenario's [`ScenarioError`], or a browser error if the
/// session could not be closed.
pub async fn run_in_session<S: Session>(
    session: S,
    ctx: &TestContext,
    scenario: Scenario,
) -> Result<(), ScenarioError> {
    let outcome = scenario.execute(&session, ctx).await;
    let closed = session.quit().await;

    match &outcome {
        Ok(()) => info!(%scenario, "Scenario passed"),
        Err(e) => error!(%scenario, error = %e, "Scenario failed"),
    }
    if let Err(e) = &closed {
        warn!(%scenario, error = %e, "Failed to close browser session");
    }

    outcome?;
    closed?;
    Ok(())
}

/// Result of one scenario in a suite run.
#[derive(Debug)]
pub struct ScenarioResult {
    /// Which scenario ran.
    pub scenario: Scenario,
    /// Failure, if any.
    pub outcome: Result<(), ScenarioError>,
    /// Wall-clock time including session setup and teardown.
    pub elapsed: Duration,
}

impl ScenarioResult {
    /// Whether the scenario passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Results of a suite run, in execution order.
#[derive(Debug, Default)]
pub struct SuiteReport {
    /// One entry per scenario run.
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    /// Number of passed scenarios.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Number of failed scenarios.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Whether every scenario passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            match &result.outcome {
                Ok(()) => writeln!(
                    f,
                    "PASS  {:<28} {:>6.1}s",
                    result.scenario.name(),
                    result.elapsed.as_secs_f64()
                )?,
                Err(e) => writeln!(
                    f,
                    "FAIL  {:<28} {:>6.1}s  {e}",
                    result.scenario.name(),
                    result.elapsed.as_secs_f64()
                )?,
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

/// Run `scenarios` one after another, each in its own session.
///
/// A failing scenario does not stop the run.
pub async fn run_suite(ctx: &TestContext, scenarios: &[Scenario]) -> SuiteReport {
    let mut report = SuiteReport::default();
    for &scenario in scenarios {
        let started = Instant::now();
        let outcome = run_scenario(ctx, scenario).await;
        report.results.push(ScenarioResult {
            scenario,
            outcome,
            elapsed: started.elapsed(),
        });
    }
    report
}
