//! VamShop E2E Admin - helpers for the admin backend.
//!
//! Every admin page sits behind the login form, so scenarios start with
//! [`auth::login_as_admin`] and end with [`auth::logout`] to leave no session
//! behind on the shared demo site.
//!
//! # Modules
//!
//! - [`auth`] - Login, logout, flash messages, dashboard location
//! - [`users`] - Admin user creation
//! - [`orders`] - Order listing and order details
//! - [`coupons`] - Coupon creation and listing
//! - [`contact_messages`] - Contact form submissions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod contact_messages;
pub mod coupons;
pub mod orders;
pub mod users;

use vamshop_e2e_browser::Locator;

/// The "Create New" link on admin listings.
#[must_use]
pub fn create_new_link() -> Locator {
    Locator::with_text("a", " Create New")
}

/// The submit button on admin edit forms.
#[must_use]
pub fn submit_button() -> Locator {
    Locator::with_text("button", " Submit")
}
