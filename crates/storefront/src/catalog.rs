//! Catalog navigation and product details.

use tracing::instrument;
use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url};

/// Products used by the cart and checkout scenarios, in the order they are
/// added.
pub const PRODUCT_PATHS: [&str; 3] = [
    "product/samsung-gear-2-charcoal-black.html",
    "product/samsung-ativ-book-4.html",
    "product/samsung-galaxy-s4.html",
];

/// Path of the Samsung Gear 2 product page.
pub const GEAR_2_PATH: &str = PRODUCT_PATHS[0];

/// Display name of the Samsung Gear 2 product.
pub const GEAR_2_NAME: &str = "Samsung Gear 2 Charcoal Black";

/// Title of the smart watches tile on the home page, as rendered.
pub const SMART_WATCHES_TITLE: &str = " Smart Watches";

/// Canonical path of the smart watches category.
pub const SMART_WATCHES_PATH: &str = "category/smart-watches.html";

/// Markup every product detail page must render.
///
/// Pairs of `(fragment, what it represents)`.
pub const PRODUCT_DETAIL_MARKERS: [(&str, &str); 4] = [
    ("<span class=\"price\">", "price"),
    ("<div class=\"product-images\">", "product images"),
    ("<b> Select Color:", "color selection"),
    ("<button type=\"submit\"", "add to cart button"),
];

/// A category tile on the home page.
#[must_use]
pub fn category_tile(title: &str) -> Locator {
    Locator::xpath(format!(
        "//h4[@class=\"title\" and text()={}]",
        vamshop_e2e_browser::xpath_literal(title)
    ))
}

/// Product entries in a category listing.
#[must_use]
pub fn product_item() -> Locator {
    Locator::xpath("//li[@class=\"item col-sm-3 col-md-4\"]")
}

/// Open the home page.
///
/// # Errors
///
/// Returns a [`BrowserError`] if navigation fails.
#[instrument(skip(browser), fields(base = %base))]
pub async fn open_home<B: Browser>(browser: &B, base: &Url) -> Result<(), BrowserError> {
    browser.goto(base).await
}

/// Click the home page tile titled `title`.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if no such tile is shown.
#[instrument(skip(browser))]
pub async fn click_category_tile<B: Browser>(browser: &B, title: &str) -> Result<(), BrowserError> {
    browser.click(&category_tile(title)).await
}

/// Open the category at `path` and click its first product.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if the listing is empty.
#[instrument(skip(browser), fields(base = %base))]
pub async fn open_first_product<B: Browser>(
    browser: &B,
    base: &Url,
    path: &str,
) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, path)?).await?;
    browser.click(&product_item()).await
}

/// Names of the [`PRODUCT_DETAIL_MARKERS`] absent from `source`.
#[must_use]
pub fn missing_product_details(source: &str) -> Vec<&'static str> {
    PRODUCT_DETAIL_MARKERS
        .iter()
        .filter(|(fragment, _)| !source.contains(fragment))
        .map(|(_, what)| *what)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vamshop_e2e_browser::fake::{FakeBrowser, FakeElement, FakePage};

    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.test/").unwrap()
    }

    #[test]
    fn test_category_tile_locator() {
        assert_eq!(
            category_tile(SMART_WATCHES_TITLE).as_str(),
            r#"//h4[@class="title" and text()=" Smart Watches"]"#
        );
    }

    #[test]
    fn test_missing_product_details() {
        let complete = r#"<span class="price">$299</span><div class="product-images"></div>
            <b> Select Color:</b><button type="submit"> Add to cart</button>"#;
        assert!(missing_product_details(complete).is_empty());

        let partial = r#"<span class="price">$299</span><button type="submit">"#;
        assert_eq!(
            missing_product_details(partial),
            vec!["product images", "color selection"]
        );
    }

    #[tokio::test]
    async fn test_category_tile_navigates() {
        let category = page_url(&base(), SMART_WATCHES_PATH).unwrap();
        let browser = FakeBrowser::new().page(
            base(),
            FakePage::new("").element(
                category_tile(SMART_WATCHES_TITLE),
                FakeElement::with_text(SMART_WATCHES_TITLE).navigates_to(category.clone()),
            ),
        );

        open_home(&browser, &base()).await.unwrap();
        click_category_tile(&browser, SMART_WATCHES_TITLE)
            .await
            .unwrap();
        assert_eq!(browser.current_url().await.unwrap(), category);
    }

    #[tokio::test]
    async fn test_open_first_product_empty_listing() {
        let browser = FakeBrowser::new();
        let err = open_first_product(&browser, &base(), SMART_WATCHES_PATH)
            .await
            .unwrap_err();
        assert!(matches!(err, BrowserError::ElementNotFound { .. }));
    }
}
