//! VamShop E2E Browser - the boundary between scenarios and a real browser.
//!
//! Page helpers never talk to WebDriver directly. They are generic over the
//! [`Browser`] trait, which exposes the handful of capabilities the suite
//! needs: navigate, locate, click, type, read text, read the page source and
//! the current URL. Waiting is layered on top in [`wait`]. Backends that own
//! a real session also implement [`Session`] so they can be closed.
//!
//! # Backends
//!
//! - [`WebDriverBrowser`] - a `thirtyfour` session against chromedriver or geckodriver
//! - `FakeBrowser` (feature `fake`) - scripted pages for unit tests
//!
//! # Selectors
//!
//! Every element is addressed with an XPath [`Locator`]. Values interpolated
//! into expressions go through [`xpath_literal`] so product names containing
//! quotes still produce valid queries.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod browser;
mod error;
mod locator;
mod site;
pub mod wait;
mod webdriver;

#[cfg(any(test, feature = "fake"))]
pub mod fake;

pub use browser::{Browser, Session};
pub use error::BrowserError;
pub use locator::{Locator, xpath_literal};
pub use site::page_url;
pub use wait::WaitConfig;
pub use webdriver::{BrowserKind, WebDriverBrowser, WebDriverConfig};
