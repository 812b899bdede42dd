//! Per-run test context.

use std::sync::OnceLock;

use url::Url;
use vamshop_e2e_core::Resources;

use crate::config::SuiteConfig;
use crate::error::ScenarioError;

/// Configuration plus the resource records, shared by every scenario of a
/// run.
///
/// Resources are read on first use, so scenarios that never touch the admin
/// backend or the checkout form run without any resource files present.
#[derive(Debug)]
pub struct TestContext {
    config: SuiteConfig,
    resources: OnceLock<Resources>,
}

impl TestContext {
    /// A context that loads resources from `config.resources_dir` on demand.
    #[must_use]
    pub const fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            resources: OnceLock::new(),
        }
    }

    /// A context with resources supplied up front.
    #[must_use]
    pub fn with_resources(config: SuiteConfig, resources: Resources) -> Self {
        Self {
            config,
            resources: OnceLock::from(resources),
        }
    }

    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Config`] if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ScenarioError> {
        Ok(Self::new(SuiteConfig::from_env()?))
    }

    /// Suite configuration.
    #[must_use]
    pub const fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Root of the site under test.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Resource records, loading them on first call.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Resource`] if a file is missing or invalid.
    /// A failed load is retried on the next call.
    pub fn resources(&self) -> Result<&Resources, ScenarioError> {
        if let Some(resources) = self.resources.get() {
            return Ok(resources);
        }
        let loaded = Resources::load(&self.config.resources_dir)?;
        Ok(self.resources.get_or_init(|| loaded))
    }
}
