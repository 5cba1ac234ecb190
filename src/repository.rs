use crate::project::ProjectNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct Repositories {
    #[serde(rename = "repository")]
    #[serde(default)]
    pub repository: Vec<RepositoryNode>,
}

/// A decoded `<repository>` element.
#[derive(Debug, Default, Deserialize)]
pub struct RepositoryNode {
    #[serde(rename = "id")]
    pub id: Option<String>,
    #[serde(rename = "url")]
    pub url: Option<String>,
    #[serde(rename = "name")]
    pub name: Option<String>,
    #[serde(rename = "layout")]
    pub layout: Option<String>,
    #[serde(rename = "releases")]
    pub releases: Option<RepositoryPolicyNode>,
    #[serde(rename = "snapshots")]
    pub snapshots: Option<RepositoryPolicyNode>,
}

/// A decoded `<releases>` or `<snapshots>` element.
#[derive(Debug, Default, Deserialize)]
pub struct RepositoryPolicyNode {
    #[serde(rename = "enabled")]
    pub enabled: Option<String>,
    #[serde(rename = "updatePolicy")]
    pub update_policy: Option<String>,
    #[serde(rename = "checksumPolicy")]
    pub checksum_policy: Option<String>,
}

/// Download policy of a repository, as raw declared text. Maven's implicit
/// defaults (`daily`, `warn`) are not filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_policy: Option<String>,
}

impl From<&RepositoryPolicyNode> for RepositoryPolicy {
    fn from(node: &RepositoryPolicyNode) -> Self {
        Self {
            enabled: node.enabled.clone(),
            update_policy: node.update_policy.clone(),
            checksum_policy: node.checksum_policy.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases: Option<RepositoryPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<RepositoryPolicy>,
}

impl Repository {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

impl From<&RepositoryNode> for Repository {
    fn from(node: &RepositoryNode) -> Self {
        Self {
            id: node.id.clone(),
            url: node.url.clone(),
            name: node.name.clone(),
            layout: node.layout.clone(),
            releases: node.releases.as_ref().map(RepositoryPolicy::from),
            snapshots: node.snapshots.as_ref().map(RepositoryPolicy::from),
        }
    }
}

/// Repositories declared directly by `project`, in declaration order.
/// Empty when there is no `<repositories>` block.
pub fn read_repositories(project: &ProjectNode) -> Vec<Repository> {
    project
        .repositories
        .as_ref()
        .map(|repos| repos.repository.iter().map(Repository::from).collect())
        .unwrap_or_default()
}
