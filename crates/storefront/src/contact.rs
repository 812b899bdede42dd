//! Contact form.

use tracing::instrument;
use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url};
use vamshop_e2e_core::ContactEnquiry;

/// Path of the contact page.
pub const CONTACT_PATH: &str = "page/contact-us.html";

/// Confirmation shown after a successful submission, including its leading
/// space.
pub const SUCCESS_MESSAGE: &str = " Your enquiry has been successfully sent!";

/// Open the contact page, fill in `enquiry` and send it.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if a form control is missing.
#[instrument(skip(browser, enquiry), fields(base = %base, email = %enquiry.email))]
pub async fn submit_enquiry<B: Browser>(
    browser: &B,
    base: &Url,
    enquiry: &ContactEnquiry,
) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, CONTACT_PATH)?).await?;
    browser
        .send_keys(&Locator::by_id("input", "name"), &enquiry.name)
        .await?;
    browser
        .send_keys(&Locator::by_id("input", "email"), enquiry.email.as_str())
        .await?;
    browser
        .send_keys(&Locator::by_id("textarea", "message"), &enquiry.message)
        .await?;
    browser.click(&Locator::with_text("button", " Send")).await
}
