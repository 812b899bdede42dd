use tracing::info;
use vamshop_e2e_admin::auth::{
    INVALID_LOGIN_MESSAGE, dashboard_url, flash_message, login_as_admin, login_as_new_user,
    login_with_wrong_password, logout,
};
use vamshop_e2e_admin::coupons::{COUPON_UPDATED_MESSAGE, create_coupon, open_coupons};
use vamshop_e2e_admin::users::{RECORD_CREATED_MESSAGE, create_user};
use vamshop_e2e_browser::Browser;

use crate::context::TestContext;
use crate::error::{ScenarioError, ensure};

async fn ensure_on_dashboard<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let dashboard = dashboard_url(ctx.base_url())?;
    let current = browser.current_url().await?;
    ensure(
        current == dashboard,
        format!("Login with correct credentials was not accepted (at {current})"),
    )
}

pub async fn login_success<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let credentials = &ctx.resources()?.credentials;
    login_as_admin(browser, ctx.base_url(), credentials).await?;
    ensure_on_dashboard(browser, ctx).await
}

pub async fn login_failure<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let credentials = &ctx.resources()?.credentials;
    login_with_wrong_password(browser, ctx.base_url(), credentials).await?;

    let dashboard = dashboard_url(ctx.base_url())?;
    ensure(
        browser.current_url().await? != dashboard,
        "Login incorrectly accepted! Redirected to the admin page without proper rights",
    )?;

    let message = flash_message(browser).await?;
    ensure(
        message == INVALID_LOGIN_MESSAGE,
        format!("Login incorrectly accepted! Unexpected message: {message:?}"),
    )
}

/// A user created through the admin panel can log in on their own.
pub async fn user_creation<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let base = ctx.base_url();
    let credentials = &ctx.resources()?.credentials;

    login_as_admin(browser, base, credentials).await?;
    create_user(
        browser,
        base,
        &credentials.new_user,
        &credentials.new_password,
        &credentials.new_email,
    )
    .await?;
    let message = flash_message(browser).await?;
    ensure(
        message == RECORD_CREATED_MESSAGE,
        format!("Account was not able to be recorded: {message:?}"),
    )?;
    info!(user = %credentials.new_user, "User created");

    logout(browser, base).await?;
    login_as_new_user(browser, base, credentials).await?;
    ensure_on_dashboard(browser, ctx).await
}

pub async fn coupon_creation<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let base = ctx.base_url();
    let resources = ctx.resources()?;
    let coupon = &resources.coupon;

    login_as_admin(browser, base, &resources.credentials).await?;
    create_coupon(browser, base, coupon).await?;
    ensure(
        browser.page_source().await?.contains(COUPON_UPDATED_MESSAGE),
        "The message for update of coupon did not show up",
    )?;

    open_coupons(browser, base).await?;
    ensure(
        browser.page_source().await?.contains(coupon.name()),
        format!("Coupon {:?} is missing from the coupon list", coupon.name()),
    )?;
    logout(browser, base).await?;
    Ok(())
}
