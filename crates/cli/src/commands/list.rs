//! Scenario catalogue listing.

use vamshop_e2e_integration_tests::Scenario;

/// Print every scenario with its description.
#[allow(clippy::print_stdout)]
pub fn print_scenarios() {
    for scenario in Scenario::ALL {
        let marker = if scenario.needs_resources() { "*" } else { " " };
        println!("{marker} {:<28} {}", scenario.name(), scenario.description());
    }
    println!();
    println!("* reads resources/ (credentials, checkout or coupon mapping)");
}
