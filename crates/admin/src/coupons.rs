//! Coupon module.

use tracing::{debug, instrument};
use url::Url;
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url};
use vamshop_e2e_core::CouponForm;

use crate::{create_new_link, submit_button};

/// Path of the coupon listing.
pub const COUPONS_PATH: &str = "module_coupons/admin/admin_index/";

/// Confirmation shown after a coupon is saved (new or edited).
pub const COUPON_UPDATED_MESSAGE: &str = "You have updated a coupon.";

/// A coupon form input by id.
#[must_use]
pub fn coupon_field(id: &str) -> Locator {
    Locator::by_id("input", id)
}

/// Open the coupon listing.
///
/// # Errors
///
/// Returns a [`BrowserError`] if navigation fails.
pub async fn open_coupons<B: Browser>(browser: &B, base: &Url) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, COUPONS_PATH)?).await
}

/// Create a coupon from `form` via the listing's "Create New" link.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] if the link, a form field or
/// the submit button is missing.
#[instrument(skip_all, fields(base = %base, coupon = form.name()))]
pub async fn create_coupon<B: Browser>(
    browser: &B,
    base: &Url,
    form: &CouponForm,
) -> Result<(), BrowserError> {
    open_coupons(browser, base).await?;
    browser.click(&create_new_link()).await?;
    for (id, value) in form.fields().iter() {
        browser.send_keys(&coupon_field(id), value).await?;
        debug!(field = id, "Coupon field typed");
    }
    browser.click(&submit_button()).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vamshop_e2e_browser::fake::{FakeBrowser, FakeElement, FakePage};
    use vamshop_e2e_core::FieldMapping;

    use super::*;

    #[tokio::test]
    async fn test_create_coupon_types_mapping() {
        let base = Url::parse("https://shop.test/").unwrap();
        let form_url = page_url(&base, "module_coupons/admin/admin_edit/").unwrap();
        let saved = page_url(&base, "module_coupons/admin/admin_index/?saved").unwrap();
        let browser = FakeBrowser::new()
            .page(
                page_url(&base, COUPONS_PATH).unwrap(),
                FakePage::new("").element(
                    create_new_link(),
                    FakeElement::default().navigates_to(form_url.clone()),
                ),
            )
            .page(
                form_url,
                FakePage::new("")
                    .element(coupon_field("ModuleCouponName"), FakeElement::input())
                    .element(coupon_field("ModuleCouponCode"), FakeElement::input())
                    .element(
                        submit_button(),
                        FakeElement::default().navigates_to(saved.clone()),
                    ),
            )
            .page(saved, FakePage::new(COUPON_UPDATED_MESSAGE));

        let form = CouponForm::try_from(FieldMapping::new([
            ("ModuleCouponName", "Ten off"),
            ("ModuleCouponCode", "TEN"),
        ]))
        .unwrap();
        create_coupon(&browser, &base, &form).await.unwrap();

        let typed: Vec<_> = browser.typed().into_iter().map(|(_, text)| text).collect();
        assert_eq!(typed, ["Ten off", "TEN"]);
        assert!(
            browser
                .page_source()
                .await
                .unwrap()
                .contains(COUPON_UPDATED_MESSAGE)
        );
    }
}
