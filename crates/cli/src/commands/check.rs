//! Resource validation.
//!
//! Loads `data.json`, `cart_mapping.json` and `coupon_mapping.json` the same
//! way a suite run does, so malformed files are caught before a browser is
//! started.

use std::path::PathBuf;

use vamshop_e2e_core::Resources;
use vamshop_e2e_integration_tests::{ScenarioError, SuiteConfig};

/// Load and summarize the resource files.
///
/// # Errors
///
/// Returns [`ScenarioError::Config`] if the environment is invalid and
/// [`ScenarioError::Resource`] if a file is missing or malformed.
#[allow(clippy::print_stdout)]
pub fn check_resources(dir: Option<PathBuf>) -> Result<(), ScenarioError> {
    let dir = match dir {
        Some(dir) => dir,
        None => SuiteConfig::from_env()?.resources_dir,
    };
    let resources = Resources::load(&dir)?;

    println!("Resources in {} are valid:", dir.display());
    println!("  admin user:      {}", resources.credentials.user);
    println!("  new user:        {}", resources.credentials.new_user);
    println!(
        "  checkout fields: {} (billed to {:?})",
        resources.checkout.fields().len(),
        resources.checkout.bill_name()
    );
    println!(
        "  coupon fields:   {} (named {:?})",
        resources.coupon.fields().len(),
        resources.coupon.name()
    );
    Ok(())
}
