//! `thirtyfour` backend.
//!
//! Connects to an already running WebDriver server (chromedriver on
//! `:9515`, geckodriver on `:4444`, or a Selenium grid). The server is not
//! spawned here.

use std::fmt;
use std::str::FromStr;

use thirtyfour::prelude::*;
use tracing::{debug, info, instrument};
use url::Url;

use crate::{Browser, BrowserError, Locator, Session};

/// Which browser the WebDriver server should launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Chrome,
    Firefox,
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
        })
    }
}

impl FromStr for BrowserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" | "chromium" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            other => Err(format!("unsupported browser '{other}' (expected chrome or firefox)")),
        }
    }
}

/// Connection settings for a WebDriver session.
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    /// WebDriver server endpoint.
    pub server_url: Url,
    /// Browser to request.
    pub browser: BrowserKind,
    /// Run without a visible window.
    pub headless: bool,
}

/// A live browser session.
///
/// Call [`Session::quit`] when done; dropping the value leaves the
/// browser window open on the server.
pub struct WebDriverBrowser {
    driver: WebDriver,
}

impl WebDriverBrowser {
    /// Open a new session.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::WebDriver`] if the server is unreachable or
    /// rejects the capabilities.
    #[instrument(skip(config), fields(server = %config.server_url, browser = %config.browser))]
    pub async fn connect(config: &WebDriverConfig) -> Result<Self, BrowserError> {
        let server = config.server_url.as_str();
        let driver = match config.browser {
            BrowserKind::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if config.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(server, caps).await?
            }
            BrowserKind::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if config.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(server, caps).await?
            }
        };
        info!("WebDriver session started");
        Ok(Self { driver })
    }

    async fn find(&self, locator: &Locator) -> Result<WebElement, BrowserError> {
        let mut found = self
            .driver
            .find_all(By::XPath(locator.as_str().to_owned()))
            .await?;
        if found.is_empty() {
            return Err(BrowserError::ElementNotFound {
                locator: locator.to_string(),
            });
        }
        Ok(found.swap_remove(0))
    }
}

impl Browser for WebDriverBrowser {
    async fn goto(&self, url: &Url) -> Result<(), BrowserError> {
        debug!(url = %url, "Navigating");
        self.driver.goto(url.as_str()).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<Url, BrowserError> {
        Ok(self.driver.current_url().await?)
    }

    async fn page_source(&self) -> Result<String, BrowserError> {
        Ok(self.driver.source().await?)
    }

    async fn exists(&self, locator: &Locator) -> Result<bool, BrowserError> {
        let found = self
            .driver
            .find_all(By::XPath(locator.as_str().to_owned()))
            .await?;
        Ok(!found.is_empty())
    }

    async fn click(&self, locator: &Locator) -> Result<(), BrowserError> {
        debug!(locator = %locator, "Clicking");
        self.find(locator).await?.click().await?;
        Ok(())
    }

    async fn send_keys(&self, locator: &Locator, text: &str) -> Result<(), BrowserError> {
        debug!(locator = %locator, "Typing");
        self.find(locator).await?.send_keys(text).await?;
        Ok(())
    }

    async fn text(&self, locator: &Locator) -> Result<String, BrowserError> {
        Ok(self.find(locator).await?.text().await?)
    }

    async fn value(&self, locator: &Locator) -> Result<Option<String>, BrowserError> {
        Ok(self.find(locator).await?.value().await?)
    }
}

impl Session for WebDriverBrowser {
    async fn quit(self) -> Result<(), BrowserError> {
        self.driver.quit().await?;
        info!("WebDriver session closed");
        Ok(())
    }
}
