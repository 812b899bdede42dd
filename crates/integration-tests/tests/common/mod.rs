//! Shared setup for the live scenario tests.

use std::path::Path;

use vamshop_e2e_integration_tests::{Scenario, SuiteConfig, TestContext, run_scenario};

/// Suite context from the environment.
///
/// `cargo test` runs from the package directory, so a relative resources
/// directory (including the default and any value from `.env`) is taken
/// relative to the workspace root.
pub fn context() -> TestContext {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let config = SuiteConfig::from_env()
        .expect("Failed to load suite configuration")
        .with_resources_root(&workspace_root);
    TestContext::new(config)
}

/// Run `scenario` in its own session, panicking with the failure.
pub async fn run(scenario: Scenario) {
    let ctx = context();
    if let Err(e) = run_scenario(&ctx, scenario).await {
        panic!("{scenario} failed: {e}");
    }
}
