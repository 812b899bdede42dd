//! Scripted in-memory browser.
//!
//! Pages are registered by URL with the elements they contain, keyed by the
//! exact XPath the helpers will ask for. Clicking an element can navigate to
//! another registered page, which is how multi-step flows are modeled.
//! Every navigation, click and keystroke is recorded for assertions, and
//! quitting the session raises a flag that outlives the browser value.
//!
//! ```rust,ignore
//! use url::Url;
//! use vamshop_e2e_browser::fake::{FakeBrowser, FakeElement, FakePage};
//! use vamshop_e2e_browser::Locator;
//!
//! let home = Url::parse("https://shop.test/").unwrap();
//! let browser = FakeBrowser::new().page(
//!     home.clone(),
//!     FakePage::new("<h1>Welcome</h1>")
//!         .element(Locator::with_text("h1", "Welcome"), FakeElement::with_text("Welcome")),
//! );
//! browser.goto(&home).await?;
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use url::Url;

use crate::{Browser, BrowserError, Locator, Session};

/// One element on a [`FakePage`].
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    text: String,
    value: Option<String>,
    navigates_to: Option<Url>,
    drops_input: bool,
    rewrites_to: Option<String>,
}

impl FakeElement {
    /// An element showing `text`.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// An empty input that accumulates typed text in its value.
    #[must_use]
    pub fn input() -> Self {
        Self {
            value: Some(String::new()),
            ..Self::default()
        }
    }

    /// An input that swallows keystrokes, leaving its value empty.
    #[must_use]
    pub fn broken_input() -> Self {
        Self {
            value: Some(String::new()),
            drops_input: true,
            ..Self::default()
        }
    }

    /// An input whose scripts replace anything typed with `shown`, the way a
    /// phone or zip mask does.
    #[must_use]
    pub fn reformatting_input(shown: impl Into<String>) -> Self {
        Self {
            value: Some(String::new()),
            rewrites_to: Some(shown.into()),
            ..Self::default()
        }
    }

    /// Clicking this element loads `url`.
    #[must_use]
    pub fn navigates_to(mut self, url: Url) -> Self {
        self.navigates_to = Some(url);
        self
    }
}

/// A document with a fixed source and a set of addressable elements.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    source: String,
    elements: HashMap<Locator, FakeElement>,
}

impl FakePage {
    /// A page whose source is `source`.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            elements: HashMap::new(),
        }
    }

    /// Make `element` reachable through `locator`.
    #[must_use]
    pub fn element(mut self, locator: Locator, element: FakeElement) -> Self {
        self.elements.insert(locator, element);
        self
    }
}

#[derive(Debug, Default)]
struct State {
    pages: HashMap<Url, FakePage>,
    current: Option<Url>,
    visits: Vec<Url>,
    clicks: Vec<Locator>,
    typed: Vec<(Locator, String)>,
}

impl State {
    fn current_page(&self) -> Option<&FakePage> {
        self.current.as_ref().and_then(|url| self.pages.get(url))
    }

    fn element_mut(&mut self, locator: &Locator) -> Result<&mut FakeElement, BrowserError> {
        let not_found = || BrowserError::ElementNotFound {
            locator: locator.to_string(),
        };
        let url = self.current.as_ref().ok_or_else(not_found)?;
        self.pages
            .get_mut(url)
            .and_then(|page| page.elements.get_mut(locator))
            .ok_or_else(not_found)
    }

    fn navigate(&mut self, url: Url) {
        self.visits.push(url.clone());
        self.current = Some(url);
    }
}

/// A [`Browser`] backed by scripted pages.
///
/// Navigating to an unregistered URL shows an empty page, the way a real
/// browser would show an error document rather than fail the call.
#[derive(Debug, Default)]
pub struct FakeBrowser {
    state: Mutex<State>,
    closed: Arc<AtomicBool>,
    quit_error: Option<String>,
}

impl FakeBrowser {
    /// A browser with no pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `page` at `url`.
    #[must_use]
    pub fn page(self, url: Url, page: FakePage) -> Self {
        self.lock().pages.insert(url, page);
        self
    }

    /// Every URL loaded, in order, including loads triggered by clicks.
    #[must_use]
    pub fn visits(&self) -> Vec<Url> {
        self.lock().visits.clone()
    }

    /// Every locator clicked, in order.
    #[must_use]
    pub fn clicks(&self) -> Vec<Locator> {
        self.lock().clicks.clone()
    }

    /// Every `(locator, text)` typed, in order.
    #[must_use]
    pub fn typed(&self) -> Vec<(Locator, String)> {
        self.lock().typed.clone()
    }

    /// Make [`Session::quit`] fail with `message` after closing.
    #[must_use]
    pub fn failing_quit(mut self, message: impl Into<String>) -> Self {
        self.quit_error = Some(message.into());
        self
    }

    /// Flag raised once the session has been quit.
    #[must_use]
    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Browser for FakeBrowser {
    async fn goto(&self, url: &Url) -> Result<(), BrowserError> {
        self.lock().navigate(url.clone());
        Ok(())
    }

    async fn current_url(&self) -> Result<Url, BrowserError> {
        match &self.lock().current {
            Some(url) => Ok(url.clone()),
            None => Ok(Url::parse("about:blank")?),
        }
    }

    async fn page_source(&self) -> Result<String, BrowserError> {
        Ok(self
            .lock()
            .current_page()
            .map(|page| page.source.clone())
            .unwrap_or_default())
    }

    async fn exists(&self, locator: &Locator) -> Result<bool, BrowserError> {
        Ok(self
            .lock()
            .current_page()
            .is_some_and(|page| page.elements.contains_key(locator)))
    }

    async fn click(&self, locator: &Locator) -> Result<(), BrowserError> {
        let mut state = self.lock();
        let target = state.element_mut(locator)?.navigates_to.clone();
        state.clicks.push(locator.clone());
        if let Some(url) = target {
            state.navigate(url);
        }
        Ok(())
    }

    async fn send_keys(&self, locator: &Locator, text: &str) -> Result<(), BrowserError> {
        let mut state = self.lock();
        let element = state.element_mut(locator)?;
        if let Some(shown) = &element.rewrites_to {
            element.value = Some(shown.clone());
        } else if !element.drops_input {
            element.value.get_or_insert_with(String::new).push_str(text);
        }
        state.typed.push((locator.clone(), text.to_owned()));
        Ok(())
    }

    async fn text(&self, locator: &Locator) -> Result<String, BrowserError> {
        Ok(self.lock().element_mut(locator)?.text.clone())
    }

    async fn value(&self, locator: &Locator) -> Result<Option<String>, BrowserError> {
        Ok(self.lock().element_mut(locator)?.value.clone())
    }
}

impl Session for FakeBrowser {
    async fn quit(self) -> Result<(), BrowserError> {
        self.closed.store(true, Ordering::SeqCst);
        match self.quit_error {
            Some(message) => Err(BrowserError::Session(message)),
            None => Ok(()),
        }
    }
}
