//! Suite configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VAMSHOP_BASE_URL` - Site under test (default: <https://demo.vamshop.com/>)
//! - `WEBDRIVER_URL` - WebDriver server (default: <http://localhost:4444>)
//! - `WEBDRIVER_BROWSER` - `chrome` or `firefox` (default: chrome)
//! - `WEBDRIVER_HEADLESS` - Run without a window (default: true)
//! - `VAMSHOP_RESOURCES_DIR` - Directory holding the JSON resources (default: resources)
//! - `VAMSHOP_WAIT_TIMEOUT_SECS` - Bound for element waits (default: 10)
//! - `VAMSHOP_SETTLE_TIMEOUT_MS` - Bound for a typed field to settle (default: 2000)

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use url::Url;
use vamshop_e2e_browser::{BrowserKind, WaitConfig, WebDriverConfig};

/// Public VamShop demo.
pub const DEFAULT_BASE_URL: &str = "https://demo.vamshop.com/";
/// Default Selenium / geckodriver endpoint.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
/// Default resources directory, relative to the working directory.
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

const DEFAULT_WAIT_TIMEOUT_SECS: &str = "10";
const DEFAULT_SETTLE_TIMEOUT_MS: &str = "2000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Everything a scenario run needs besides the resource files.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Root of the site under test, always ending in `/`.
    pub base_url: Url,
    /// WebDriver session settings.
    pub webdriver: WebDriverConfig,
    /// Where `data.json`, `cart_mapping.json` and `coupon_mapping.json` live.
    pub resources_dir: PathBuf,
    /// Bound for elements that appear after a round trip.
    pub wait: WaitConfig,
    /// Bound for a typed checkout field to show its value.
    pub settle: WaitConfig,
}

impl SuiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let base_url = parse_base_url(&get("VAMSHOP_BASE_URL", DEFAULT_BASE_URL))?;
        let server_url = Url::parse(&get("WEBDRIVER_URL", DEFAULT_WEBDRIVER_URL))
            .map_err(|e| invalid("WEBDRIVER_URL", e))?;
        let browser = get("WEBDRIVER_BROWSER", "chrome")
            .parse::<BrowserKind>()
            .map_err(|e| invalid("WEBDRIVER_BROWSER", e))?;
        let headless = parse_bool("WEBDRIVER_HEADLESS", &get("WEBDRIVER_HEADLESS", "true"))?;
        let resources_dir = PathBuf::from(get("VAMSHOP_RESOURCES_DIR", DEFAULT_RESOURCES_DIR));
        let wait_secs = get("VAMSHOP_WAIT_TIMEOUT_SECS", DEFAULT_WAIT_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| invalid("VAMSHOP_WAIT_TIMEOUT_SECS", e))?;
        let settle_ms = get("VAMSHOP_SETTLE_TIMEOUT_MS", DEFAULT_SETTLE_TIMEOUT_MS)
            .parse::<u64>()
            .map_err(|e| invalid("VAMSHOP_SETTLE_TIMEOUT_MS", e))?;

        Ok(Self {
            base_url,
            webdriver: WebDriverConfig {
                server_url,
                browser,
                headless,
            },
            resources_dir,
            wait: WaitConfig::with_timeout(Duration::from_secs(wait_secs)),
            settle: WaitConfig::with_timeout(Duration::from_millis(settle_ms)),
        })
    }

    /// Resolve a relative `resources_dir` against `root` instead of the
    /// working directory.
    #[must_use]
    pub fn with_resources_root(mut self, root: &Path) -> Self {
        if self.resources_dir.is_relative() {
            self.resources_dir = root.join(&self.resources_dir);
        }
        self
    }
}

/// Parse the site root, appending a trailing `/` so relative joins stay
/// below it.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` if `value` is not an absolute URL.
pub fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|e| invalid("VAMSHOP_BASE_URL", e))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(invalid(key, format!("expected a boolean, got '{other}'"))),
    }
}

fn invalid(key: &str, error: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), error.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> Result<SuiteConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SuiteConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.webdriver.server_url.as_str(), "http://localhost:4444/");
        assert_eq!(config.webdriver.browser, BrowserKind::Chrome);
        assert!(config.webdriver.headless);
        assert_eq!(config.resources_dir, PathBuf::from("resources"));
        assert_eq!(config.wait.timeout, Duration::from_secs(10));
        assert_eq!(config.settle.timeout, Duration::from_millis(2000));
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("VAMSHOP_BASE_URL", "http://localhost:8080/shop"),
            ("WEBDRIVER_BROWSER", "firefox"),
            ("WEBDRIVER_HEADLESS", "false"),
            ("VAMSHOP_WAIT_TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/shop/");
        assert_eq!(config.webdriver.browser, BrowserKind::Firefox);
        assert!(!config.webdriver.headless);
        assert_eq!(config.wait.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            from_map(&[("VAMSHOP_BASE_URL", "not a url")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "VAMSHOP_BASE_URL"
        ));
        assert!(matches!(
            from_map(&[("WEBDRIVER_HEADLESS", "maybe")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "WEBDRIVER_HEADLESS"
        ));
        assert!(matches!(
            from_map(&[("WEBDRIVER_BROWSER", "lynx")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "WEBDRIVER_BROWSER"
        ));
    }

    #[test]
    fn test_relative_resources_dir_resolved_against_root() {
        let config = from_map(&[("VAMSHOP_RESOURCES_DIR", "resources")])
            .unwrap()
            .with_resources_root(Path::new("/work/vamshop-e2e"));
        assert_eq!(
            config.resources_dir,
            PathBuf::from("/work/vamshop-e2e/resources")
        );
    }

    #[test]
    fn test_absolute_resources_dir_kept() {
        let config = from_map(&[("VAMSHOP_RESOURCES_DIR", "/srv/e2e/resources")])
            .unwrap()
            .with_resources_root(Path::new("/work/vamshop-e2e"));
        assert_eq!(config.resources_dir, PathBuf::from("/srv/e2e/resources"));
    }

    #[test]
    fn test_huge_wait_timeout_accepted() {
        let config = from_map(&[("VAMSHOP_WAIT_TIMEOUT_SECS", "18446744073709551615")]).unwrap();
        assert_eq!(config.wait.timeout, Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_base_url_joins_below_root() {
        let base = parse_base_url("https://example.test/vamshop").unwrap();
        assert_eq!(
            base.join("page/cart-contents.html").unwrap().as_str(),
            "https://example.test/vamshop/page/cart-contents.html"
        );
    }
}
