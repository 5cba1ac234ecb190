//! Parses Maven POM descriptors into a [`Descriptor`] and resolves the parent chain.
//!
//! `groupId` and `version` fall back to the declared `<parent>` when a POM leaves them
//! out. Parent POMs are fetched through a pluggable [`ParentFetcher`] (HTTP against the
//! declared repositories by default) and parsed recursively, so `parent_pom` holds the
//! whole ancestor chain. A parent that cannot be found never fails the parse.
//!
//! ```no_run
//! # async fn demo() -> Result<(), pom_resolver::PomError> {
//! let xml = std::fs::read_to_string("pom.xml").unwrap_or_default();
//! let descriptor = pom_resolver::parse_pom(&xml).await?;
//! for ancestor in descriptor.ancestors() {
//!     println!("{}", ancestor.coordinates);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coordinates;
pub mod dependencies;
pub mod dependency;
pub mod descriptor;
pub mod error;
pub mod fetch;
pub mod parent;
pub mod project;
pub mod repository;
pub mod resolver;

pub use crate::config::ResolverConfig;
pub use coordinates::{resolve_coordinates, CoordinateNode, Coordinates};
pub use dependencies::read_dependencies;
pub use dependency::Dependency;
pub use descriptor::Descriptor;
pub use error::{ConfigError, FetchError, PomError};
pub use fetch::{
    fetcher_fn, FallbackFetcher, FnFetcher, HttpRepositoryFetcher, LocalRepositoryFetcher,
    ParentFetcher,
};
pub use parent::{ParentInformation, ParentReference};
pub use project::{decode_project, ProjectNode};
pub use repository::{read_repositories, Repository, RepositoryPolicy};
pub use resolver::PomParser;

/// Parses `xml` with the default HTTP parent fetcher.
pub async fn parse_pom(xml: &str) -> Result<Descriptor, PomError> {
    PomParser::new().parse(xml).await
}
