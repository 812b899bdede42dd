//! End-to-end scenarios for the VamShop storefront and admin backend.
//!
//! # Running Tests
//!
//! ```bash
//! # Start a WebDriver server
//! chromedriver --port=4444
//!
//! # Run the live scenarios (ignored by default)
//! cargo test -p vamshop-e2e-integration-tests -- --ignored --test-threads=1
//!
//! # Or through the CLI
//! cargo run -p vamshop-e2e-cli -- run
//! ```
//!
//! Configuration comes from the environment (see [`config`]); the admin,
//! checkout and coupon scenarios also read the JSON files in `resources/`.
//!
//! # Test Categories
//!
//! - `storefront` - Catalog, cart and contact form
//! - `admin` - Authentication, user and coupon management
//! - `checkout` - Order placement verified from the admin backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod context;
pub mod error;
pub mod runner;
pub mod scenarios;

pub use config::{ConfigError, SuiteConfig};
pub use context::TestContext;
pub use error::ScenarioError;
pub use runner::{ScenarioResult, SuiteReport, run_in_session, run_scenario, run_suite};
pub use scenarios::Scenario;
