//! Loading the JSON resource files.
//!
//! The suite reads three files from a resources directory:
//!
//! | File | Record |
//! |------|--------|
//! | `data.json` | [`Credentials`] |
//! | `cart_mapping.json` | [`CheckoutForm`] |
//! | `coupon_mapping.json` | [`CouponForm`] |

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::types::{CheckoutForm, CouponForm, Credentials};

/// File holding [`Credentials`].
pub const CREDENTIALS_FILE: &str = "data.json";
/// File holding the [`CheckoutForm`] mapping.
pub const CHECKOUT_FILE: &str = "cart_mapping.json";
/// File holding the [`CouponForm`] mapping.
pub const COUPON_FILE: &str = "coupon_mapping.json";

/// Errors that can occur while loading resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid JSON, or a required key is missing or malformed.
    #[error("invalid resource {}: {source}", path.display())]
    Json {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// All records the suite needs, loaded once per test context.
#[derive(Debug, Clone)]
pub struct Resources {
    /// Admin and new-user credentials.
    pub credentials: Credentials,
    /// Checkout form values.
    pub checkout: CheckoutForm,
    /// Coupon form values.
    pub coupon: CouponForm,
}

impl Resources {
    /// Load every resource file from `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResourceError`] encountered.
    pub fn load(dir: &Path) -> Result<Self, ResourceError> {
        Ok(Self {
            credentials: load_json(&dir.join(CREDENTIALS_FILE))?,
            checkout: load_json(&dir.join(CHECKOUT_FILE))?,
            coupon: load_json(&dir.join(COUPON_FILE))?,
        })
    }
}

/// Read and deserialize one JSON file.
///
/// # Errors
///
/// Returns [`ResourceError::Io`] if the file cannot be read and
/// [`ResourceError::Json`] if it does not deserialize into `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ResourceError> {
    debug!(path = %path.display(), "Loading resource");
    let contents = fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ResourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}
