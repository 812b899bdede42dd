//! Order listing and details.

use tracing::instrument;
use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url};

/// Path of the admin order listing.
pub const ORDERS_PATH: &str = "orders/admin/";

/// Section heading on the order detail page.
pub const BILLING_SECTION: &str = "Billing Information";

/// Section heading on the order detail page.
pub const SHIPPING_SECTION: &str = "Shipping Information";

/// Link to an order, labeled with its billing name.
#[must_use]
pub fn order_link(bill_name: &str) -> Locator {
    Locator::with_text("a", bill_name)
}

/// Open the order listing.
///
/// # Errors
///
/// Returns a [`BrowserError`] if navigation fails.
pub async fn open_orders<B: Browser>(browser: &B, base: &Url) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, ORDERS_PATH)?).await
}

/// Open the first order in the listing billed to `bill_name`.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if no listed order carries
/// that name.
#[instrument(skip(browser))]
pub async fn open_order<B: Browser>(browser: &B, bill_name: &str) -> Result<(), BrowserError> {
    browser.click(&order_link(bill_name)).await
}

/// Order detail sections absent from `source`.
#[must_use]
pub fn missing_order_sections(source: &str) -> Vec<&'static str> {
    [BILLING_SECTION, SHIPPING_SECTION]
        .into_iter()
        .filter(|section| !source.contains(section))
        .collect()
}
