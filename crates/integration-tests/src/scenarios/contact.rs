use vamshop_e2e_admin::auth::{login_as_admin, logout};
use vamshop_e2e_admin::contact_messages::open_contact_messages;
use vamshop_e2e_browser::Browser;
use vamshop_e2e_core::ContactEnquiry;
use vamshop_e2e_storefront::contact::{SUCCESS_MESSAGE, submit_enquiry};

use crate::context::TestContext;
use crate::error::{ScenarioError, ensure};

pub async fn contact_form<B: Browser>(
    browser: &B,
    ctx: &TestContext,
) -> Result<(), ScenarioError> {
    let base = ctx.base_url();
    let enquiry = ContactEnquiry::sample();

    submit_enquiry(browser, base, &enquiry).await?;
    ensure(
        browser.page_source().await?.contains(SUCCESS_MESSAGE),
        "The message for successful contact did not show up",
    )?;

    login_as_admin(browser, base, &ctx.resources()?.credentials).await?;
    open_contact_messages(browser, base).await?;
    ensure(
        browser.page_source().await?.contains(enquiry.email.as_str()),
        format!("Contact message from {} is missing from the list", enquiry.email),
    )?;
    logout(browser, base).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vamshop_e2e_admin::contact_messages::CONTACT_MESSAGES_PATH;
    use vamshop_e2e_browser::fake::{FakeBrowser, FakeElement, FakePage};
    use vamshop_e2e_browser::{Locator, page_url};
    use vamshop_e2e_storefront::contact::CONTACT_PATH;

    use super::*;
    use crate::scenarios::test_support::{base, context, with_admin_login};

    fn site(confirmation: &str, messages: &str) -> FakeBrowser {
        let sent = page_url(&base(), "page/contact-us.html?sent").unwrap();
        with_admin_login(FakeBrowser::new())
            .page(
                page_url(&base(), CONTACT_PATH).unwrap(),
                FakePage::new("")
                    .element(Locator::by_id("input", "name"), FakeElement::input())
                    .element(Locator::by_id("input", "email"), FakeElement::input())
                    .element(Locator::by_id("textarea", "message"), FakeElement::input())
                    .element(
                        Locator::with_text("button", " Send"),
                        FakeElement::default().navigates_to(sent.clone()),
                    ),
            )
            .page(sent, FakePage::new(confirmation))
            .page(
                page_url(&base(), CONTACT_MESSAGES_PATH).unwrap(),
                FakePage::new(messages),
            )
    }

    #[tokio::test]
    async fn test_contact_form_visible_to_admin() {
        let browser = site(SUCCESS_MESSAGE, "<td>someone@somewhere.tt</td>");
        contact_form(&browser, &context()).await.unwrap();
    }

    #[tokio::test]
    async fn test_contact_form_missing_from_admin_listing() {
        let browser = site(SUCCESS_MESSAGE, "<td>other@somewhere.tt</td>");
        let err = contact_form(&browser, &context()).await.unwrap_err();
        match err {
            ScenarioError::Assertion(message) => {
                assert!(message.contains("someone@somewhere.tt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_contact_form_without_confirmation() {
        let browser = site("Please fill in all fields", "<td>someone@somewhere.tt</td>");
        let err = contact_form(&browser, &context()).await.unwrap_err();
        assert!(matches!(err, ScenarioError::Assertion(_)));
    }
}
