//! Scenario failures.

use thiserror::Error;
use vamshop_e2e_browser::BrowserError;
use vamshop_e2e_core::{PriceError, ResourceError};
use vamshop_e2e_storefront::cart::LineTotalError;

use crate::config::ConfigError;

/// Why a scenario failed.
///
/// Element lookups, waits and assertions all end the scenario; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Element not found, wait timed out, or the session broke.
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// Observed page state differs from what the scenario expects.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// A price cell could not be read as an amount.
    #[error("price error: {0}")]
    Price(#[from] PriceError),

    /// A resource file is missing or malformed.
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// The suite configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<LineTotalError> for ScenarioError {
    fn from(err: LineTotalError) -> Self {
        match err {
            LineTotalError::Browser(e) => Self::Browser(e),
            LineTotalError::Price(e) => Self::Price(e),
        }
    }
}

/// Fail with `message` unless `condition` holds.
///
/// # Errors
///
/// Returns [`ScenarioError::Assertion`] when `condition` is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), ScenarioError> {
    if condition {
        Ok(())
    } else {
        Err(ScenarioError::Assertion(message.into()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure() {
        assert!(ensure(true, "unused").is_ok());
        let err = ensure(false, "cart is empty").unwrap_err();
        assert_eq!(err.to_string(), "assertion failed: cart is empty");
    }

    #[test]
    fn test_line_total_error_maps_to_price() {
        let err = ScenarioError::from(LineTotalError::Price(PriceError::NoAmount(
            "--".to_string(),
        )));
        assert!(matches!(err, ScenarioError::Price(_)));
    }
}
