//! VamShop E2E Core - Shared data records.
//!
//! This crate provides the plain records the suite reads before driving a
//! browser:
//! - [`Credentials`] - admin login and the user the suite creates
//! - [`FieldMapping`], [`CheckoutForm`], [`CouponForm`] - form values keyed by input id
//! - [`Price`] - amounts parsed from rendered cart cells
//! - [`Email`] - validated email addresses
//!
//! # Architecture
//!
//! The core crate contains only types and resource loading - no browser,
//! no HTTP clients. The browser-facing crates build on it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers and records
//! - [`resources`] - Loading the JSON resource files

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod resources;
pub mod types;

pub use resources::{ResourceError, Resources};
pub use types::*;
