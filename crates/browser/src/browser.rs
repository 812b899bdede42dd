use std::future::Future;

use url::Url;

use crate::{BrowserError, Locator};

/// The capabilities a scenario needs from a browser session.
///
/// Element operations take a [`Locator`] and resolve it against the current
/// page on every call; no element handles outlive a single step, so a page
/// reload between steps cannot leave a stale reference behind. When several
/// elements match, the first in document order is used.
pub trait Browser: Send + Sync {
    /// Load `url` and wait for the document to be ready.
    fn goto(&self, url: &Url) -> impl Future<Output = Result<(), BrowserError>> + Send;

    /// The location of the current document.
    fn current_url(&self) -> impl Future<Output = Result<Url, BrowserError>> + Send;

    /// Serialized HTML of the current document.
    fn page_source(&self) -> impl Future<Output = Result<String, BrowserError>> + Send;

    /// Whether at least one element matches `locator`.
    fn exists(&self, locator: &Locator)
    -> impl Future<Output = Result<bool, BrowserError>> + Send;

    /// Click the element matching `locator`.
    fn click(&self, locator: &Locator) -> impl Future<Output = Result<(), BrowserError>> + Send;

    /// Type `text` into the element matching `locator`.
    fn send_keys(
        &self,
        locator: &Locator,
        text: &str,
    ) -> impl Future<Output = Result<(), BrowserError>> + Send;

    /// Visible text of the element matching `locator`.
    fn text(&self, locator: &Locator) -> impl Future<Output = Result<String, BrowserError>> + Send;

    /// The `value` property of the element matching `locator` (inputs only).
    fn value(
        &self,
        locator: &Locator,
    ) -> impl Future<Output = Result<Option<String>, BrowserError>> + Send;
}

/// A browser session that is closed explicitly once a scenario is done.
///
/// Closing consumes the session, so no step can run against a browser that
/// has already quit.
pub trait Session: Browser + Sized {
    /// End the session and close the browser window.
    fn quit(self) -> impl Future<Output = Result<(), BrowserError>> + Send;
}
