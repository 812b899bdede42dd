use std::time::Duration;

use thiserror::Error;

/// Errors raised while driving the browser.
///
/// Every variant is fatal to the scenario that hit it; nothing here is
/// retried.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The current page has no element matching the locator.
    #[error("element not found: {locator}")]
    ElementNotFound {
        /// The XPath that matched nothing.
        locator: String,
    },

    /// A bounded wait expired before its condition held.
    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout {
        /// Description of the awaited condition.
        what: String,
        /// The bound that expired.
        timeout: Duration,
    },

    /// A URL could not be built or parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The session could not be opened or closed.
    #[error("browser session error: {0}")]
    Session(String),

    /// The WebDriver session reported an error.
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}
