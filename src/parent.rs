use crate::coordinates::{resolve_coordinates, CoordinateNode, Coordinates};
use crate::repository::Repository;
use serde::{Deserialize, Serialize};

/// A decoded `<parent>` element. Its children are literal values.
#[derive(Debug, Default, Deserialize)]
pub struct ParentNode {
    #[serde(rename = "groupId")]
    pub group_id: Option<String>,
    #[serde(rename = "artifactId")]
    pub artifact_id: Option<String>,
    #[serde(rename = "version")]
    pub version: Option<String>,
    #[serde(rename = "relativePath")]
    pub relative_path: Option<String>,
}

impl CoordinateNode for ParentNode {
    fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Pointer from a descriptor to the descriptor it inherits from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentReference {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

impl From<&ParentNode> for ParentReference {
    fn from(node: &ParentNode) -> Self {
        Self {
            coordinates: resolve_coordinates(node),
            relative_path: node.relative_path.clone(),
        }
    }
}

/// Everything a [`ParentFetcher`](crate::fetch::ParentFetcher) gets to locate a parent POM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentInformation {
    pub artifact_coordinates: Coordinates,
    pub relative_path: Option<String>,
    pub repositories: Vec<Repository>,
}

impl ParentInformation {
    pub fn new(reference: &ParentReference, repositories: Vec<Repository>) -> Self {
        Self {
            artifact_coordinates: reference.coordinates.clone(),
            relative_path: reference.relative_path.clone(),
            repositories,
        }
    }

    /// Declared repository URLs, trailing slashes trimmed, skipping repositories without one.
    pub fn repository_urls(&self) -> impl Iterator<Item = &str> {
        self.repositories
            .iter()
            .filter_map(|repo| repo.url.as_deref())
            .map(|url| url.trim_end_matches('/'))
    }
}
