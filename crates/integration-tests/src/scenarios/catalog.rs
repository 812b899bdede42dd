use tracing::info;
use vamshop_e2e_browser::{Browser, page_url};
use vamshop_e2e_storefront::catalog::{
    SMART_WATCHES_PATH, SMART_WATCHES_TITLE, click_category_tile, missing_product_details,
    open_first_product, open_home,
};

use crate::context::TestContext;
use crate::error::{ScenarioError, ensure};

/// The smart watches tile opens the canonical category URL, and loading that
/// URL again keeps it.
pub async fn category_navigation<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let base = ctx.base_url();
    let expected = page_url(base, SMART_WATCHES_PATH)?;

    open_home(browser, base).await?;
    click_category_tile(browser, SMART_WATCHES_TITLE).await?;
    let landed = browser.current_url().await?;
    ensure(
        landed == expected,
        format!("The button does not load the correct URL: expected {expected}, got {landed}"),
    )?;

    browser.goto(&landed).await?;
    let reloaded = browser.current_url().await?;
    ensure(
        reloaded == expected,
        format!("Reloading the category moved to {reloaded}"),
    )?;
    info!(url = %expected, "Category URL is canonical");
    Ok(())
}

/// The first smart watch exposes price, images, color selection and an add
/// to cart button.
pub async fn product_detail_completeness<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    open_first_product(browser, ctx.base_url(), SMART_WATCHES_PATH).await?;
    let source = browser.page_source().await?;
    let missing = missing_product_details(&source);
    ensure(
        missing.is_empty(),
        format!("Product details are missing: {}", missing.join(", ")),
    )
}
