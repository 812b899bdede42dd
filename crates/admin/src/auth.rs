//! Admin authentication.
//!
//! There is no login result to return: the backend redirects to the
//! dashboard on success and re-renders the form with a flash message on
//! failure. Callers check [`dashboard_url`] or [`flash_message`].

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};
use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url};
use vamshop_e2e_core::Credentials;

/// Path of the admin login form.
pub const LOGIN_PATH: &str = "users/admin_login/";

/// Path that ends the admin session.
pub const LOGOUT_PATH: &str = "users/admin_logout/";

/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "admin/admin_top/";

/// Flash message for rejected credentials.
pub const INVALID_LOGIN_MESSAGE: &str = "No match for Username and/or Password.";

/// Username input, shared by the login and user creation forms.
#[must_use]
pub fn username_input() -> Locator {
    Locator::by_id("input", "UserUsername")
}

/// Password input, shared by the login and user creation forms.
#[must_use]
pub fn password_input() -> Locator {
    Locator::by_id("input", "UserPassword")
}

/// Login form submit button.
#[must_use]
pub fn login_button() -> Locator {
    Locator::with_text("button", " Login")
}

/// Flash message container.
#[must_use]
pub fn flash_container() -> Locator {
    Locator::by_id("div", "flashMessage")
}

/// The admin dashboard URL for `base`.
///
/// # Errors
///
/// Returns [`BrowserError::InvalidUrl`] if `base` cannot be joined.
pub fn dashboard_url(base: &Url) -> Result<Url, BrowserError> {
    page_url(base, DASHBOARD_PATH)
}

/// Submit the login form with `username` and `password`.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if the form is not shown, e.g.
/// because a session is already active.
#[instrument(skip(browser, password), fields(base = %base))]
pub async fn login<B: Browser>(
    browser: &B,
    base: &Url,
    username: &str,
    password: &SecretString,
) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, LOGIN_PATH)?).await?;
    browser.send_keys(&username_input(), username).await?;
    browser
        .send_keys(&password_input(), password.expose_secret())
        .await?;
    browser.click(&login_button()).await?;
    info!("Login submitted");
    Ok(())
}

/// Log in as the configured admin.
///
/// # Errors
///
/// See [`login`].
pub async fn login_as_admin<B: Browser>(
    browser: &B,
    base: &Url,
    credentials: &Credentials,
) -> Result<(), BrowserError> {
    login(browser, base, &credentials.user, &credentials.password).await
}

/// Attempt to log in as the configured admin with a wrong password.
///
/// # Errors
///
/// See [`login`].
pub async fn login_with_wrong_password<B: Browser>(
    browser: &B,
    base: &Url,
    credentials: &Credentials,
) -> Result<(), BrowserError> {
    login(browser, base, &credentials.user, &credentials.wrong_password).await
}

/// Log in as the account created by the user creation scenario.
///
/// # Errors
///
/// See [`login`].
pub async fn login_as_new_user<B: Browser>(
    browser: &B,
    base: &Url,
    credentials: &Credentials,
) -> Result<(), BrowserError> {
    login(browser, base, &credentials.new_user, &credentials.new_password).await
}

/// End the admin session.
///
/// # Errors
///
/// Returns a [`BrowserError`] if navigation fails.
#[instrument(skip(browser), fields(base = %base))]
pub async fn logout<B: Browser>(browser: &B, base: &Url) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, LOGOUT_PATH)?).await
}

/// Text of the flash message on the current page.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if no flash message is shown.
pub async fn flash_message<B: Browser>(browser: &B) -> Result<String, BrowserError> {
    browser.text(&flash_container()).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vamshop_e2e_browser::fake::{FakeBrowser, FakeElement, FakePage};

    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.test/").unwrap()
    }

    fn credentials() -> Credentials {
        serde_json::from_str(
            r#"{"user": "demo", "password": "right", "wrong_password": "wrong",
                "new_user": "e2e", "new_password": "fresh", "new_email": "e2e@example.com"}"#,
        )
        .unwrap()
    }

    fn login_page(button: FakeElement) -> FakePage {
        FakePage::new("")
            .element(username_input(), FakeElement::input())
            .element(password_input(), FakeElement::input())
            .element(login_button(), button)
    }

    #[test]
    fn test_dashboard_url() {
        assert_eq!(
            dashboard_url(&Url::parse("https://demo.vamshop.com/").unwrap())
                .unwrap()
                .as_str(),
            "https://demo.vamshop.com/admin/admin_top/"
        );
    }

    #[tokio::test]
    async fn test_login_as_admin_lands_on_dashboard() {
        let dashboard = dashboard_url(&base()).unwrap();
        let browser = FakeBrowser::new()
            .page(
                page_url(&base(), LOGIN_PATH).unwrap(),
                login_page(FakeElement::default().navigates_to(dashboard.clone())),
            )
            .page(dashboard.clone(), FakePage::new("dashboard"));

        login_as_admin(&browser, &base(), &credentials()).await.unwrap();

        assert_eq!(browser.current_url().await.unwrap(), dashboard);
        let typed: Vec<_> = browser.typed().into_iter().map(|(_, text)| text).collect();
        assert_eq!(typed, ["demo", "right"]);
    }

    #[tokio::test]
    async fn test_wrong_password_shows_flash() {
        let rejected = page_url(&base(), "users/admin_login/?failed").unwrap();
        let browser = FakeBrowser::new()
            .page(
                page_url(&base(), LOGIN_PATH).unwrap(),
                login_page(FakeElement::default().navigates_to(rejected.clone())),
            )
            .page(
                rejected,
                FakePage::new("").element(
                    flash_container(),
                    FakeElement::with_text(INVALID_LOGIN_MESSAGE),
                ),
            );

        login_with_wrong_password(&browser, &base(), &credentials())
            .await
            .unwrap();

        let typed: Vec<_> = browser.typed().into_iter().map(|(_, text)| text).collect();
        assert_eq!(typed, ["demo", "wrong"]);
        assert_ne!(
            browser.current_url().await.unwrap(),
            dashboard_url(&base()).unwrap()
        );
        assert_eq!(flash_message(&browser).await.unwrap(), INVALID_LOGIN_MESSAGE);
    }

    #[tokio::test]
    async fn test_new_user_login_uses_new_credentials() {
        let browser = FakeBrowser::new().page(
            page_url(&base(), LOGIN_PATH).unwrap(),
            login_page(FakeElement::default()),
        );

        login_as_new_user(&browser, &base(), &credentials())
            .await
            .unwrap();

        let typed: Vec<_> = browser.typed().into_iter().map(|(_, text)| text).collect();
        assert_eq!(typed, ["e2e", "fresh"]);
    }

    #[tokio::test]
    async fn test_logout_visits_logout_path() {
        let browser = FakeBrowser::new();
        logout(&browser, &base()).await.unwrap();
        assert_eq!(
            browser.visits(),
            vec![page_url(&base(), LOGOUT_PATH).unwrap()]
        );
    }
}
