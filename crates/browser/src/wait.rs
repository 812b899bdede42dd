//! Bounded polling waits.
//!
//! VamShop renders several steps (checkout confirmation, thank-you page)
//! after a round trip that a plain click does not wait for. These helpers
//! poll a condition until it holds or a bound expires, and turn expiry into
//! [`BrowserError::WaitTimeout`].

use std::fmt::Display;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, instrument};

use crate::{Browser, BrowserError, Locator};

/// Default bound for element waits.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default delay between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Bound and cadence of a polling wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Give up after this long.
    pub timeout: Duration,
    /// Sleep this long between checks.
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitConfig {
    /// A wait bounded by `timeout` with the default poll interval.
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Poll `condition` until it returns `true`.
///
/// The condition always runs at least once, even with a zero timeout. Errors
/// from the condition end the wait immediately. A timeout too large to form a
/// deadline waits without bound.
///
/// # Errors
///
/// Returns [`BrowserError::WaitTimeout`] naming `what` when the bound
/// expires, or the first error the condition returns.
pub async fn wait_until<F, Fut>(
    config: WaitConfig,
    what: impl Display,
    mut condition: F,
) -> Result<(), BrowserError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, BrowserError>>,
{
    let deadline = Instant::now().checked_add(config.timeout);
    loop {
        if condition().await? {
            return Ok(());
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(BrowserError::WaitTimeout {
                what: what.to_string(),
                timeout: config.timeout,
            });
        }
        sleep(config.poll_interval).await;
    }
}

/// Wait until an element matching `locator` is present.
///
/// # Errors
///
/// Returns [`BrowserError::WaitTimeout`] if the element never appears.
#[instrument(skip(browser), fields(locator = %locator))]
pub async fn wait_for<B: Browser>(
    browser: &B,
    locator: &Locator,
    config: WaitConfig,
) -> Result<(), BrowserError> {
    wait_until(config, format!("element {locator}"), || {
        browser.exists(locator)
    })
    .await?;
    debug!("Element present");
    Ok(())
}

/// Wait until the input matching `locator` has taken `typed`.
///
/// Used after typing into fields whose scripts rewrite input while it is
/// being entered. The field is settled once its value ends with `typed`
/// (pre-filled fields keep their prefix), or once a non-empty value reads the
/// same on two consecutive polls, which covers masks that reformat the
/// typed text.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if the input disappears, or
/// [`BrowserError::WaitTimeout`] if the value never settles.
#[instrument(skip(browser, typed), fields(locator = %locator))]
pub async fn wait_for_typed_value<B: Browser>(
    browser: &B,
    locator: &Locator,
    typed: &str,
    config: WaitConfig,
) -> Result<(), BrowserError> {
    let previous: Mutex<Option<String>> = Mutex::new(None);
    wait_until(config, format!("value of {locator} to settle"), || async {
        let Some(value) = browser.value(locator).await? else {
            return Ok(false);
        };
        if value.ends_with(typed) {
            return Ok(true);
        }
        let mut previous = previous.lock().unwrap_or_else(PoisonError::into_inner);
        let stable = !value.is_empty() && previous.as_deref() == Some(value.as_str());
        *previous = Some(value);
        Ok(stable)
    })
    .await
}
