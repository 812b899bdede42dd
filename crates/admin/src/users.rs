//! Admin user management.

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;
use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url};
use vamshop_e2e_core::Email;

use crate::auth::{password_input, username_input};
use crate::{create_new_link, submit_button};

/// Path of the admin user listing.
pub const USERS_PATH: &str = "users/admin/";

/// Flash message after a user is saved.
pub const RECORD_CREATED_MESSAGE: &str = "Record created.";

/// Email input on the user form.
#[must_use]
pub fn email_input() -> Locator {
    Locator::by_id("input", "UserEmail")
}

/// Create an admin user through the listing's "Create New" form.
///
/// The outcome is reported by the flash message on the resulting page.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if the listing or form controls
/// are missing, which is also what happens without an admin session.
#[instrument(skip(browser, password), fields(base = %base, email = %email))]
pub async fn create_user<B: Browser>(
    browser: &B,
    base: &Url,
    username: &str,
    password: &SecretString,
    email: &Email,
) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, USERS_PATH)?).await?;
    browser.click(&create_new_link()).await?;
    browser.send_keys(&username_input(), username).await?;
    browser
        .send_keys(&password_input(), password.expose_secret())
        .await?;
    browser.send_keys(&email_input(), email.as_str()).await?;
    browser.click(&submit_button()).await
}
