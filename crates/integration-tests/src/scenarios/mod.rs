//! The scenario catalogue.
//!
//! Each scenario is a linear navigate, act, assert procedure against the live
//! site. The first failing step ends it; there is no branching and no retry.

mod admin;
mod cart;
mod catalog;
mod checkout;
mod contact;

use std::fmt;
use std::str::FromStr;

use vamshop_e2e_browser::Browser;

use crate::context::TestContext;
use crate::error::ScenarioError;

pub use cart::QUANTITY_PRICING_UNITS;

/// One independently run browser workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    CategoryNavigation,
    ProductDetailCompleteness,
    SingleAddToCart,
    MultiAddAndRemove,
    QuantityPricing,
    AdminLoginSuccess,
    AdminLoginFailure,
    AdminUserCreation,
    CheckoutFlow,
    CouponCreation,
    ContactForm,
}

impl Scenario {
    /// Every scenario, in suite order.
    pub const ALL: [Self; 11] = [
        Self::CategoryNavigation,
        Self::ProductDetailCompleteness,
        Self::SingleAddToCart,
        Self::MultiAddAndRemove,
        Self::QuantityPricing,
        Self::AdminLoginSuccess,
        Self::AdminLoginFailure,
        Self::AdminUserCreation,
        Self::CheckoutFlow,
        Self::CouponCreation,
        Self::ContactForm,
    ];

    /// Stable identifier used on the command line and in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CategoryNavigation => "category_navigation",
            Self::ProductDetailCompleteness => "product_detail_completeness",
            Self::SingleAddToCart => "single_add_to_cart",
            Self::MultiAddAndRemove => "multi_add_and_remove",
            Self::QuantityPricing => "quantity_pricing",
            Self::AdminLoginSuccess => "admin_login_success",
            Self::AdminLoginFailure => "admin_login_failure",
            Self::AdminUserCreation => "admin_user_creation",
            Self::CheckoutFlow => "checkout_flow",
            Self::CouponCreation => "coupon_creation",
            Self::ContactForm => "contact_form",
        }
    }

    /// One-line summary of what the scenario checks.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CategoryNavigation => "Category tile opens its canonical category URL",
            Self::ProductDetailCompleteness => {
                "Product page shows price, images, color selection and add to cart"
            }
            Self::SingleAddToCart => "An added product is listed in the cart",
            Self::MultiAddAndRemove => "Three products are listed; a removed one disappears",
            Self::QuantityPricing => "Unit price is unchanged after removing one of several units",
            Self::AdminLoginSuccess => "Valid admin credentials land on the dashboard",
            Self::AdminLoginFailure => "Invalid admin credentials are rejected with a message",
            Self::AdminUserCreation => "A user created in the admin panel can log in",
            Self::CheckoutFlow => "A checkout completes and the order is visible to the admin",
            Self::CouponCreation => "A created coupon is listed by name",
            Self::ContactForm => "A contact enquiry is confirmed and visible to the admin",
        }
    }

    /// Whether the scenario needs the JSON resource files.
    #[must_use]
    pub const fn needs_resources(self) -> bool {
        matches!(
            self,
            Self::AdminLoginSuccess
                | Self::AdminLoginFailure
                | Self::AdminUserCreation
                | Self::CheckoutFlow
                | Self::CouponCreation
                | Self::ContactForm
        )
    }

    /// Run the scenario body against an open browser session.
    ///
    /// # Errors
    ///
    /// Returns the first failing step as a [`ScenarioError`].
    pub async fn execute<B: Browser>(
        self,
        browser: &B,
        ctx: &TestContext,
    ) -> Result<(), ScenarioError> {
        match self {
            Self::CategoryNavigation => catalog::category_navigation(browser, ctx).await,
            Self::ProductDetailCompleteness => {
                catalog::product_detail_completeness(browser, ctx).await
            }
            Self::SingleAddToCart => cart::single_add_to_cart(browser, ctx).await,
            Self::MultiAddAndRemove => cart::multi_add_and_remove(browser, ctx).await,
            Self::QuantityPricing => cart::quantity_pricing(browser, ctx).await,
            Self::AdminLoginSuccess => admin::login_success(browser, ctx).await,
            Self::AdminLoginFailure => admin::login_failure(browser, ctx).await,
            Self::AdminUserCreation => admin::user_creation(browser, ctx).await,
            Self::CheckoutFlow => checkout::checkout_flow(browser, ctx).await,
            Self::CouponCreation => admin::coupon_creation(browser, ctx).await,
            Self::ContactForm => contact::contact_form(browser, ctx).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| format!("unknown scenario '{s}'"))
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_names_unique_and_parseable() {
        let names: HashSet<_> = Scenario::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Scenario::ALL.len());
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse::<Scenario>().unwrap(), scenario);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!("checkout".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_storefront_scenarios_need_no_resources() {
        assert!(!Scenario::SingleAddToCart.needs_resources());
        assert!(Scenario::CheckoutFlow.needs_resources());
    }
}
