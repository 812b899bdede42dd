//! Core types for the VamShop suite.
//!
//! This module provides type-safe wrappers for the records fed to the forms
//! and the values read back from rendered pages.

pub mod credential;
pub mod email;
pub mod enquiry;
pub mod mapping;
pub mod price;

pub use credential::Credentials;
pub use email::{Email, EmailError};
pub use enquiry::ContactEnquiry;
pub use mapping::{CheckoutForm, CouponForm, FieldMapping, MappingError};
pub use price::{Price, PriceError, unit_price};
