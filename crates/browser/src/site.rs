use url::Url;

use crate::BrowserError;

/// Resolve a site-relative `path` against `base`.
///
/// `base` should end in `/`; otherwise its last segment is replaced, as with
/// any relative link.
///
/// # Errors
///
/// Returns [`BrowserError::InvalidUrl`] if the result is not a valid URL.
pub fn page_url(base: &Url, path: &str) -> Result<Url, BrowserError> {
    Ok(base.join(path)?)
}
