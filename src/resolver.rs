use crate::config::{ResolverConfig, DEFAULT_MAX_DEPTH};
use crate::coordinates::{resolve_coordinates, Coordinates};
use crate::descriptor::Descriptor;
use crate::error::{ConfigError, PomError};
use crate::fetch::{HttpRepositoryFetcher, ParentFetcher};
use crate::parent::{ParentInformation, ParentReference};
use crate::project::{decode_project, ProjectNode};
use crate::repository::read_repositories;
use async_recursion::async_recursion;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Parses POM text and follows its parent chain through a [`ParentFetcher`].
///
/// Only malformed input rejects a parse. A parent that cannot be located, fetched or
/// decoded leaves `parent_pom` empty instead.
#[derive(Clone)]
pub struct PomParser {
    fetcher: Arc<dyn ParentFetcher>,
    max_depth: usize,
}

impl Default for PomParser {
    fn default() -> Self {
        Self::with_fetcher(HttpRepositoryFetcher::default())
    }
}

impl PomParser {
    /// A parser that fetches parents from the declared repositories over HTTP.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetcher(fetcher: impl ParentFetcher + 'static) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            fetcher: Arc::from(config.fetcher()?),
            max_depth: config.max_depth,
        })
    }

    /// Caps how many ancestors get attached. Parents past the cap are left unresolved.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses `xml` and resolves its ancestors.
    ///
    /// # Errors
    /// Returns `PomError` when `xml` itself is not a well-formed `<project>` document.
    pub async fn parse(&self, xml: &str) -> Result<Descriptor, PomError> {
        let project = decode_project(xml)?;

        let mut chain = HashSet::new();
        remember(&mut chain, resolve_coordinates(&project));
        let parent_pom = self.resolve_parent(&project, 0, &mut chain).await;

        Ok(Descriptor::assemble(&project, parent_pom))
    }

    #[async_recursion]
    async fn resolve_parent(
        &self,
        project: &ProjectNode,
        depth: usize,
        chain: &mut HashSet<Coordinates>,
    ) -> Option<Descriptor> {
        let Some(parent) = project.parent.as_ref() else {
            debug!(depth, "no parent declared");
            return None;
        };
        let reference = ParentReference::from(parent);
        let coordinates = reference.coordinates.clone();

        let repositories = read_repositories(project);
        if repositories.is_empty() {
            debug!(parent = %coordinates, "no repositories to search for parent");
            return None;
        }
        if depth >= self.max_depth {
            warn!(
                parent = %coordinates,
                max_depth = self.max_depth,
                "parent chain too deep, not resolving further"
            );
            return None;
        }
        if coordinates.artifact_id.is_some() && chain.contains(&coordinates) {
            warn!(parent = %coordinates, "parent chain loops back on itself");
            return None;
        }

        debug!(parent = %coordinates, repositories = repositories.len(), "fetching parent POM");
        let information = ParentInformation::new(&reference, repositories);
        let xml = match self.fetcher.find_parent(&information).await {
            Ok(Some(xml)) => xml,
            Ok(None) => {
                warn!(parent = %coordinates, "parent POM not found");
                return None;
            }
            Err(e) => {
                warn!(parent = %coordinates, error = %e, "failed to fetch parent POM");
                return None;
            }
        };

        let ancestor = match decode_project(&xml) {
            Ok(ancestor) => ancestor,
            Err(e) => {
                warn!(parent = %coordinates, error = %e, "fetched parent POM is malformed");
                return None;
            }
        };

        remember(chain, resolve_coordinates(&ancestor));
        let grandparent = self.resolve_parent(&ancestor, depth + 1, chain).await;
        debug!(parent = %coordinates, "resolved parent POM");
        Some(Descriptor::assemble(&ancestor, grandparent))
    }
}

/// Records a descriptor of the current chain. Triples without an artifactId cannot
/// identify a POM and are left out.
fn remember(chain: &mut HashSet<Coordinates>, coordinates: Coordinates) {
    if coordinates.artifact_id.is_some() {
        chain.insert(coordinates);
    }
}
