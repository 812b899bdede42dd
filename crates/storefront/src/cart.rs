//! Cart helper.

use tracing::{debug, instrument};
use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url, xpath_literal};
use vamshop_e2e_core::{Price, PriceError};

/// Path of the cart contents page.
pub const CART_PATH: &str = "page/cart-contents.html";

/// The add-to-cart button on a product page.
#[must_use]
pub fn add_to_cart_button() -> Locator {
    Locator::xpath(r#"//button[@type="submit" and text()=" Add to cart"]"#)
}

/// The product title on a product page.
#[must_use]
pub fn product_name_heading() -> Locator {
    Locator::xpath(r#"//h2[@itemprop="name"]"#)
}

/// The remove link on the cart line for `product`.
#[must_use]
pub fn remove_link(product: &str) -> Locator {
    Locator::xpath(format!(
        r#"//td/a[text()={}]/following::a[@class="remove"]"#,
        xpath_literal(product)
    ))
}

/// Total cell of the first product line (summary rows carry a class).
#[must_use]
pub fn line_total_cell() -> Locator {
    Locator::xpath("//tbody/tr[not(@class)]/td[last()]")
}

/// Errors from reading the cart line total.
#[derive(Debug, thiserror::Error)]
pub enum LineTotalError {
    /// The cell could not be read.
    #[error(transparent)]
    Browser(#[from] BrowserError),
    /// The cell text holds no amount.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Open the product page at `path`, add it to the cart and return its name.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if the page has no add-to-cart
/// button or no product title.
#[instrument(skip(browser), fields(base = %base))]
pub async fn add_product_to_cart<B: Browser>(
    browser: &B,
    base: &Url,
    path: &str,
) -> Result<String, BrowserError> {
    browser.goto(&page_url(base, path)?).await?;
    browser.click(&add_to_cart_button()).await?;
    let name = browser.text(&product_name_heading()).await?;
    debug!(product = %name, "Added to cart");
    Ok(name)
}

/// Add every product in `paths`, in order, returning their names in the
/// same order.
///
/// # Errors
///
/// Stops at the first product that cannot be added.
pub async fn add_products_to_cart<B, P>(
    browser: &B,
    base: &Url,
    paths: P,
) -> Result<Vec<String>, BrowserError>
where
    B: Browser,
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let mut names = Vec::new();
    for path in paths {
        names.push(add_product_to_cart(browser, base, path.as_ref()).await?);
    }
    Ok(names)
}

/// Open the cart contents page.
///
/// # Errors
///
/// Returns a [`BrowserError`] if navigation fails.
pub async fn open_cart<B: Browser>(browser: &B, base: &Url) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, CART_PATH)?).await
}

/// Click the remove link on the line for `product`.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if the cart has no such line.
#[instrument(skip(browser))]
pub async fn remove_product<B: Browser>(browser: &B, product: &str) -> Result<(), BrowserError> {
    browser.click(&remove_link(product)).await
}

/// Read the total of the first product line.
///
/// # Errors
///
/// Returns [`LineTotalError::Browser`] if the cell is missing and
/// [`LineTotalError::Price`] if its text holds no amount.
pub async fn line_total<B: Browser>(browser: &B) -> Result<Price, LineTotalError> {
    let text = browser.text(&line_total_cell()).await?;
    Ok(Price::parse_display(&text)?)
}
