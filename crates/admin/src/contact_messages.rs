//! Contact form submissions as seen by the admin.

use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, page_url};

/// Path of the contact message listing.
pub const CONTACT_MESSAGES_PATH: &str = "contact_us/admin/";

/// Open the contact message listing.
///
/// # Errors
///
/// Returns a [`BrowserError`] if navigation fails.
pub async fn open_contact_messages<B: Browser>(
    browser: &B,
    base: &Url,
) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, CONTACT_MESSAGES_PATH)?).await
}
