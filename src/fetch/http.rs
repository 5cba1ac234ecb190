use super::ParentFetcher;
use crate::config::HttpConfig;
use crate::error::FetchError;
use crate::parent::ParentInformation;
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches the parent POM from every declared repository at once and keeps the first
/// success, in repository declaration order. A 4xx answer means the repository does not
/// have the artifact; other failures are logged and only drop that one candidate.
#[derive(Debug, Clone, Default)]
pub struct HttpRepositoryFetcher {
    client: Client,
}

impl HttpRepositoryFetcher {
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_client(builder.build()?))
    }

    /// One URL per repository that declares one:
    /// `{url}/{group path}/{artifactId}/{version}/{artifactId}-{version}.pom`.
    pub fn candidate_urls(information: &ParentInformation) -> Result<Vec<String>, FetchError> {
        let pom_path = information
            .artifact_coordinates
            .pom_path()
            .ok_or_else(|| {
                FetchError::IncompleteCoordinates(information.artifact_coordinates.clone())
            })?;

        Ok(information
            .repository_urls()
            .map(|base| format!("{base}/{pom_path}"))
            .collect())
    }

    async fn fetch_candidate(&self, url: &str) -> Result<Option<String>, FetchError> {
        debug!(url, "requesting parent POM");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(Some(response.text().await?));
        }
        if status.is_client_error() {
            debug!(url, status = status.as_u16(), "repository does not have the parent POM");
            return Ok(None);
        }
        Err(FetchError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl ParentFetcher for HttpRepositoryFetcher {
    async fn find_parent(
        &self,
        information: &ParentInformation,
    ) -> Result<Option<String>, FetchError> {
        let urls = Self::candidate_urls(information)?;
        let results = join_all(urls.iter().map(|url| self.fetch_candidate(url))).await;

        let mut found = None;
        for (url, result) in urls.iter().zip(results) {
            match result {
                Ok(Some(body)) if found.is_none() => found = Some(body),
                Ok(_) => {}
                Err(e) => warn!(url = %url, error = %e, "parent POM candidate failed"),
            }
        }
        Ok(found)
    }
}
