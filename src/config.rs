//! Resolver configuration.
//!
//! Loaded from environment variables with the `POM_RESOLVER` prefix, nested values
//! separated by `__`:
//!
//! - `POM_RESOLVER__MAX_DEPTH=16` -> `max_depth = 16`
//! - `POM_RESOLVER__HTTP__TIMEOUT_SECS=10` -> `http.timeout_secs = 10`
//! - `POM_RESOLVER__LOCAL_REPOSITORY=/srv/m2` -> `local_repository = "/srv/m2"`

use crate::error::ConfigError;
use crate::fetch::{FallbackFetcher, HttpRepositoryFetcher, LocalRepositoryFetcher, ParentFetcher};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_MAX_DEPTH: usize = 32;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Maximum number of ancestors attached below a parsed POM.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub http: HttpConfig,

    /// Local repository root. Defaults to `~/.m2/repository`.
    #[serde(default)]
    pub local_repository: Option<PathBuf>,

    /// Only look in the local repository.
    #[serde(default)]
    pub offline: bool,

    /// Look in the local repository before the declared remote repositories.
    #[serde(default)]
    pub prefer_local: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_user_agent() -> String {
    concat!("pom-resolver/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            http: HttpConfig::default(),
            local_repository: None,
            offline: false,
            prefer_local: false,
        }
    }
}

impl ResolverConfig {
    /// Reads configuration from `POM_RESOLVER__*` environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` when a variable cannot be parsed into its field.
    pub fn load() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("POM_RESOLVER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        Ok(())
    }

    fn local_fetcher(&self) -> Result<LocalRepositoryFetcher, ConfigError> {
        match &self.local_repository {
            Some(root) => Ok(LocalRepositoryFetcher::new(root)),
            None => Ok(LocalRepositoryFetcher::user_default()?),
        }
    }

    /// The parent fetcher these settings describe: remote repositories over HTTP unless
    /// `offline` or `prefer_local` bring the local repository in.
    pub fn fetcher(&self) -> Result<Box<dyn ParentFetcher>, ConfigError> {
        if self.offline {
            return Ok(Box::new(self.local_fetcher()?));
        }

        let http = HttpRepositoryFetcher::from_config(&self.http)?;
        if self.prefer_local {
            return Ok(Box::new(FallbackFetcher::new(self.local_fetcher()?, http)));
        }
        Ok(Box::new(http))
    }
}
