use tracing::info;
use vamshop_e2e_browser::Browser;
use vamshop_e2e_core::unit_price;
use vamshop_e2e_storefront::catalog::{GEAR_2_NAME, GEAR_2_PATH, PRODUCT_PATHS};
use vamshop_e2e_storefront::cart::{line_total, open_cart, remove_product};
use vamshop_e2e_storefront::{add_product_to_cart, add_products_to_cart};

use crate::context::TestContext;
use crate::error::{ScenarioError, ensure};

/// How many units of one product the pricing scenario adds.
pub const QUANTITY_PRICING_UNITS: u32 = 3;

pub async fn single_add_to_cart<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    add_product_to_cart(browser, ctx.base_url(), GEAR_2_PATH).await?;
    open_cart(browser, ctx.base_url()).await?;
    ensure(
        browser.page_source().await?.contains(GEAR_2_NAME),
        "Expected product is not added to the cart",
    )
}

pub async fn multi_add_and_remove<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let products = add_products_to_cart(browser, ctx.base_url(), PRODUCT_PATHS).await?;
    open_cart(browser, ctx.base_url()).await?;

    let source = browser.page_source().await?;
    for product in &products {
        ensure(source.contains(product.as_str()), format!("{product} not added to the cart"))?;
    }

    let Some(first) = products.first() else {
        return Err(ScenarioError::Assertion("No products were added".to_string()));
    };
    remove_product(browser, first).await?;
    ensure(
        !browser.page_source().await?.contains(first.as_str()),
        format!("{first} is not removed from the cart"),
    )
}

/// Removing one of several identical units must leave the unit price
/// unchanged: `before / n == after / (n - 1)`.
pub async fn quantity_pricing<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let n = QUANTITY_PRICING_UNITS;
    let paths = std::iter::repeat_n(GEAR_2_PATH, n as usize);
    let names = add_products_to_cart(browser, ctx.base_url(), paths).await?;
    let Some(product) = names.first() else {
        return Err(ScenarioError::Assertion("No products were added".to_string()));
    };

    open_cart(browser, ctx.base_url()).await?;
    ensure(
        browser.page_source().await?.contains(product.as_str()),
        format!("{product} not added to the cart"),
    )?;
    let before = line_total(browser).await?;

    remove_product(browser, product).await?;
    let after = line_total(browser).await?;
    ensure(
        browser.page_source().await?.contains(product.as_str()),
        format!("{product} removed from the cart. Expected to have {} left", n - 1),
    )?;

    let unit_before = unit_price(before, n)?;
    let unit_after = unit_price(after, n - 1)?;
    info!(%before, %after, %unit_before, %unit_after, "Line totals");
    ensure(
        unit_before == unit_after,
        format!(
            "The product price calculation is faulty: {before} / {n} != {after} / {}",
            n - 1
        ),
    )
}
