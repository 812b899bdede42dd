//! Suite execution.

use tracing::info;
use vamshop_e2e_integration_tests::{
    Scenario, ScenarioError, SuiteConfig, TestContext, config::parse_base_url, run_suite,
};

use crate::RunArgs;

/// Apply command-line overrides on top of the environment configuration.
fn apply_overrides(mut config: SuiteConfig, args: &RunArgs) -> Result<SuiteConfig, ScenarioError> {
    if let Some(base_url) = &args.base_url {
        config.base_url = parse_base_url(base_url.as_str())?;
    }
    if let Some(server_url) = &args.webdriver_url {
        config.webdriver.server_url = server_url.clone();
    }
    if let Some(browser) = args.browser {
        config.webdriver.browser = browser;
    }
    if args.headed {
        config.webdriver.headless = false;
    }
    if let Some(resources) = &args.resources {
        config.resources_dir.clone_from(resources);
    }
    Ok(config)
}

/// Run the selected scenarios and print a report.
///
/// Returns `Ok(false)` when at least one scenario failed.
///
/// # Errors
///
/// Returns [`ScenarioError`] for configuration problems, or for missing
/// resources when a selected scenario needs them. Scenario failures are
/// reported, not returned.
#[allow(clippy::print_stdout)]
pub async fn run(args: RunArgs) -> Result<bool, ScenarioError> {
    let config = apply_overrides(SuiteConfig::from_env()?, &args)?;
    let scenarios: Vec<Scenario> = if args.scenarios.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        args.scenarios
    };

    let ctx = TestContext::new(config);
    if scenarios.iter().any(|s| s.needs_resources()) {
        ctx.resources()?;
    }

    info!(
        base_url = %ctx.base_url(),
        webdriver = %ctx.config().webdriver.server_url,
        scenarios = scenarios.len(),
        "Running suite"
    );
    let report = run_suite(&ctx, &scenarios).await;
    println!("{report}");
    Ok(report.is_success())
}
