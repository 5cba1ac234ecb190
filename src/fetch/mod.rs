//! Strategies for locating the raw text of a parent POM.
//!
//! The resolver only knows the [`ParentFetcher`] port. [`HttpRepositoryFetcher`] is the
//! default; [`LocalRepositoryFetcher`], [`FallbackFetcher`] and closures wrapped with
//! [`fetcher_fn`] can be injected instead.

mod fallback;
mod http;
mod local;

pub use fallback::FallbackFetcher;
pub use http::HttpRepositoryFetcher;
pub use local::LocalRepositoryFetcher;

use crate::error::FetchError;
use crate::parent::ParentInformation;
use async_trait::async_trait;
use std::future::Future;

/// Port for obtaining the POM text of a declared parent.
#[async_trait]
pub trait ParentFetcher: Send + Sync {
    /// Returns the parent's POM text, or `None` when no source has it.
    ///
    /// # Errors
    /// Returns `FetchError` when the lookup itself fails. The resolver treats this the
    /// same as `None`.
    async fn find_parent(&self, information: &ParentInformation)
        -> Result<Option<String>, FetchError>;
}

/// Adapts an async closure into a [`ParentFetcher`].
pub struct FnFetcher<F> {
    find: F,
}

/// Wraps `find` so it can be handed to [`PomParser::with_fetcher`](crate::PomParser::with_fetcher).
///
/// ```ignore
/// let parser = PomParser::with_fetcher(fetcher_fn(|info: ParentInformation| async move {
///     Ok(Some(load_from_cache(&info.artifact_coordinates)?))
/// }));
/// ```
pub fn fetcher_fn<F, Fut>(find: F) -> FnFetcher<F>
where
    F: Fn(ParentInformation) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<String>, FetchError>> + Send,
{
    FnFetcher { find }
}

#[async_trait]
impl<F, Fut> ParentFetcher for FnFetcher<F>
where
    F: Fn(ParentInformation) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<String>, FetchError>> + Send,
{
    async fn find_parent(
        &self,
        information: &ParentInformation,
    ) -> Result<Option<String>, FetchError> {
        (self.find)(information.clone()).await
    }
}
