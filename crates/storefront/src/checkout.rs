//! Checkout form and order confirmation.
//!
//! The checkout page re-renders parts of the form while fields are being
//! typed, and keystrokes sent too quickly after one another can land in the
//! wrong input. Each field is therefore typed and then polled until its value
//! shows the typed text before the next field is touched.

use tracing::{debug, info, instrument};
use url::Url;
use vamshop_e2e_browser::wait::{WaitConfig, wait_for, wait_for_typed_value};
use vamshop_e2e_browser::{Browser, BrowserError, Locator, page_url};
use vamshop_e2e_core::CheckoutForm;

/// Path of the checkout page.
pub const CHECKOUT_PATH: &str = "page/checkout.html";

/// A checkout input by id.
#[must_use]
pub fn checkout_field(id: &str) -> Locator {
    Locator::by_id("input", id)
}

/// Submits the address step.
#[must_use]
pub fn continue_button() -> Locator {
    Locator::with_text("button", " Continue")
}

/// Places the order on the review step.
#[must_use]
pub fn confirm_order_button() -> Locator {
    Locator::with_text("button", " Confirm Order")
}

/// Heading of the order confirmation page.
#[must_use]
pub fn thank_you_heading() -> Locator {
    Locator::with_text("h2", "Thank You")
}

/// Open the checkout page.
///
/// # Errors
///
/// Returns a [`BrowserError`] if navigation fails.
pub async fn open_checkout<B: Browser>(browser: &B, base: &Url) -> Result<(), BrowserError> {
    browser.goto(&page_url(base, CHECKOUT_PATH)?).await
}

/// Type every field of `form`, in order, waiting for each to settle.
///
/// # Errors
///
/// Returns [`BrowserError::ElementNotFound`] for an unknown field id and
/// [`BrowserError::WaitTimeout`] if a field never shows its typed value
/// within `settle`.
#[instrument(skip_all, fields(fields = form.fields().len()))]
pub async fn fill_checkout_form<B: Browser>(
    browser: &B,
    form: &CheckoutForm,
    settle: WaitConfig,
) -> Result<(), BrowserError> {
    for (id, value) in form.fields().iter() {
        let field = checkout_field(id);
        browser.send_keys(&field, value).await?;
        wait_for_typed_value(browser, &field, value, settle).await?;
        debug!(field = id, "Field settled");
    }
    Ok(())
}

/// Continue past the address step, confirm the order and wait for the
/// confirmation page.
///
/// # Errors
///
/// Returns [`BrowserError::WaitTimeout`] if the review step or the
/// confirmation page does not appear within `wait`.
#[instrument(skip_all)]
pub async fn place_order<B: Browser>(browser: &B, wait: WaitConfig) -> Result<(), BrowserError> {
    browser.click(&continue_button()).await?;
    wait_for(browser, &confirm_order_button(), wait).await?;
    browser.click(&confirm_order_button()).await?;
    wait_for(browser, &thank_you_heading(), wait).await?;
    info!("Order placed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use vamshop_e2e_browser::fake::{FakeBrowser, FakeElement, FakePage};
    use vamshop_e2e_core::FieldMapping;

    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.test/").unwrap()
    }

    fn quick() -> WaitConfig {
        WaitConfig {
            timeout: Duration::from_millis(20),
            poll_interval: Duration::from_millis(1),
        }
    }

    fn form() -> CheckoutForm {
        CheckoutForm::try_from(FieldMapping::new([
            ("bill_name", "Jane Doe"),
            ("bill_line_1", "1 Main St"),
            ("email", "jane@example.com"),
        ]))
        .unwrap()
    }

    fn checkout_page(inputs: &[(&str, FakeElement)]) -> FakePage {
        inputs
            .iter()
            .fold(FakePage::new("checkout"), |page, (id, element)| {
                page.element(checkout_field(id), element.clone())
            })
    }

    #[tokio::test]
    async fn test_fill_types_fields_in_order() {
        let browser = FakeBrowser::new().page(
            page_url(&base(), CHECKOUT_PATH).unwrap(),
            checkout_page(&[
                ("bill_name", FakeElement::input()),
                ("bill_line_1", FakeElement::input()),
                ("email", FakeElement::input()),
            ]),
        );

        open_checkout(&browser, &base()).await.unwrap();
        fill_checkout_form(&browser, &form(), quick()).await.unwrap();

        let typed: Vec<_> = browser
            .typed()
            .into_iter()
            .map(|(locator, text)| (locator.to_string(), text))
            .collect();
        assert_eq!(
            typed,
            vec![
                (r#"//input[@id="bill_name"]"#.to_string(), "Jane Doe".to_string()),
                (r#"//input[@id="bill_line_1"]"#.to_string(), "1 Main St".to_string()),
                (r#"//input[@id="email"]"#.to_string(), "jane@example.com".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fill_fails_when_field_drops_input() {
        let browser = FakeBrowser::new().page(
            page_url(&base(), CHECKOUT_PATH).unwrap(),
            checkout_page(&[
                ("bill_name", FakeElement::input()),
                ("bill_line_1", FakeElement::broken_input()),
                ("email", FakeElement::input()),
            ]),
        );

        open_checkout(&browser, &base()).await.unwrap();
        let err = fill_checkout_form(&browser, &form(), quick())
            .await
            .unwrap_err();

        assert!(matches!(err, BrowserError::WaitTimeout { .. }));
        assert_eq!(browser.typed().len(), 2);
    }

    #[tokio::test]
    async fn test_fill_accepts_masked_field() {
        let browser = FakeBrowser::new().page(
            page_url(&base(), CHECKOUT_PATH).unwrap(),
            checkout_page(&[
                ("bill_name", FakeElement::input()),
                ("bill_line_1", FakeElement::input()),
                ("email", FakeElement::reformatting_input("JANE@EXAMPLE.COM")),
            ]),
        );

        open_checkout(&browser, &base()).await.unwrap();
        fill_checkout_form(&browser, &form(), quick()).await.unwrap();
        assert_eq!(browser.typed().len(), 3);
    }

    #[tokio::test]
    async fn test_place_order_reaches_thank_you() {
        let review = page_url(&base(), "page/confirm.html").unwrap();
        let done = page_url(&base(), "page/thank-you.html").unwrap();
        let browser = FakeBrowser::new()
            .page(
                page_url(&base(), CHECKOUT_PATH).unwrap(),
                FakePage::new("").element(
                    continue_button(),
                    FakeElement::default().navigates_to(review.clone()),
                ),
            )
            .page(
                review,
                FakePage::new("").element(
                    confirm_order_button(),
                    FakeElement::default().navigates_to(done.clone()),
                ),
            )
            .page(
                done.clone(),
                FakePage::new("<h2>Thank You</h2>")
                    .element(thank_you_heading(), FakeElement::with_text("Thank You")),
            );

        open_checkout(&browser, &base()).await.unwrap();
        place_order(&browser, quick()).await.unwrap();
        assert_eq!(browser.current_url().await.unwrap(), done);
    }

    #[tokio::test]
    async fn test_place_order_times_out_without_review_step() {
        let browser = FakeBrowser::new().page(
            page_url(&base(), CHECKOUT_PATH).unwrap(),
            FakePage::new("").element(continue_button(), FakeElement::default()),
        );

        open_checkout(&browser, &base()).await.unwrap();
        let err = place_order(&browser, quick()).await.unwrap_err();
        assert!(matches!(err, BrowserError::WaitTimeout { .. }));
    }
}
