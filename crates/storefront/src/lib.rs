//! VamShop E2E Storefront - helpers for the public shop pages.
//!
//! Each helper performs one user-visible step (open a category, add a product
//! to the cart, fill the checkout form) against any [`Browser`] and fails
//! with a [`BrowserError`] the moment an expected control is missing.
//! Assertions are left to the scenarios.
//!
//! # Modules
//!
//! - [`catalog`] - Home page category tiles, category listings, product details
//! - [`cart`] - Adding products, the cart page, line totals, removal
//! - [`checkout`] - Checkout form and order confirmation
//! - [`contact`] - Contact form
//!
//! [`Browser`]: vamshop_e2e_browser::Browser
//! [`BrowserError`]: vamshop_e2e_browser::BrowserError

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;

pub use cart::{add_product_to_cart, add_products_to_cart};
