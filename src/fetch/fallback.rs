use super::ParentFetcher;
use crate::error::FetchError;
use crate::parent::ParentInformation;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Asks `primary` first and falls back to `fallback` when the primary has nothing or fails.
///
/// ```ignore
/// let fetcher = FallbackFetcher::new(
///     LocalRepositoryFetcher::user_default()?,
///     HttpRepositoryFetcher::default(),
/// );
/// ```
pub struct FallbackFetcher {
    primary: Box<dyn ParentFetcher>,
    fallback: Box<dyn ParentFetcher>,
}

impl FallbackFetcher {
    pub fn new(
        primary: impl ParentFetcher + 'static,
        fallback: impl ParentFetcher + 'static,
    ) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }
    }
}

#[async_trait]
impl ParentFetcher for FallbackFetcher {
    async fn find_parent(
        &self,
        information: &ParentInformation,
    ) -> Result<Option<String>, FetchError> {
        match self.primary.find_parent(information).await {
            Ok(Some(xml)) => return Ok(Some(xml)),
            Ok(None) => debug!(
                parent = %information.artifact_coordinates,
                "primary fetcher has no parent POM, trying fallback"
            ),
            Err(e) => warn!(
                parent = %information.artifact_coordinates,
                error = %e,
                "primary fetcher failed, trying fallback"
            ),
        }
        self.fallback.find_parent(information).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Coordinates;
    use crate::fetch::fetcher_fn;

    fn information() -> ParentInformation {
        ParentInformation {
            artifact_coordinates: Coordinates::new("g", "a", "1"),
            relative_path: None,
            repositories: Vec::new(),
        }
    }

    #[tokio::test]
    async fn primary_hit_skips_fallback() {
        let fetcher = FallbackFetcher::new(
            fetcher_fn(|_| async { Ok::<_, FetchError>(Some("primary".to_string())) }),
            fetcher_fn(|_| async {
                Err::<Option<String>, _>(FetchError::Other("must not be called".into()))
            }),
        );

        let found = fetcher.find_parent(&information()).await.unwrap();
        assert_eq!(found.as_deref(), Some("primary"));
    }

    #[tokio::test]
    async fn miss_and_failure_fall_through() {
        let after_miss = FallbackFetcher::new(
            fetcher_fn(|_| async { Ok::<Option<String>, FetchError>(None) }),
            fetcher_fn(|_| async { Ok::<_, FetchError>(Some("fallback".to_string())) }),
        );
        assert_eq!(
            after_miss.find_parent(&information()).await.unwrap().as_deref(),
            Some("fallback")
        );

        let after_error = FallbackFetcher::new(
            fetcher_fn(|_| async {
                Err::<Option<String>, _>(FetchError::Other("offline".into()))
            }),
            fetcher_fn(|_| async { Ok::<_, FetchError>(Some("fallback".to_string())) }),
        );
        assert_eq!(
            after_error.find_parent(&information()).await.unwrap().as_deref(),
            Some("fallback")
        );
    }
}
