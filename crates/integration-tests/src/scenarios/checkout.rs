use tracing::info;
use vamshop_e2e_admin::auth::{login_as_admin, logout};
use vamshop_e2e_admin::orders::{missing_order_sections, open_order, open_orders};
use vamshop_e2e_browser::Browser;
use vamshop_e2e_storefront::add_products_to_cart;
use vamshop_e2e_storefront::catalog::PRODUCT_PATHS;
use vamshop_e2e_storefront::checkout::{fill_checkout_form, open_checkout, place_order};

use crate::context::TestContext;
use crate::error::{ScenarioError, ensure};

/// Buy the catalogue products, then find the order in the admin backend by
/// its billing name.
pub async fn checkout_flow<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let base = ctx.base_url();
    let config = ctx.config();
    let resources = ctx.resources()?;
    let form = &resources.checkout;

    add_products_to_cart(browser, base, PRODUCT_PATHS).await?;
    open_checkout(browser, base).await?;
    fill_checkout_form(browser, form, config.settle).await?;
    place_order(browser, config.wait).await?;

    login_as_admin(browser, base, &resources.credentials).await?;
    open_orders(browser, base).await?;
    let bill_name = form.bill_name();
    ensure(
        browser.page_source().await?.contains(bill_name),
        format!("The order for {bill_name:?} is not present in the order list"),
    )?;

    open_order(browser, bill_name).await?;
    let missing = missing_order_sections(&browser.page_source().await?);
    ensure(
        missing.is_empty(),
        format!("Order details lack: {}", missing.join(", ")),
    )?;
    info!(bill_name, "Order verified");

    logout(browser, base).await?;
    Ok(())
}
