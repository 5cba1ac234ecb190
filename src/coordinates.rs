use serde::Serialize;
use std::fmt;

/// The `(groupId, artifactId, version)` triple of an artifact. Any part may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Coordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
        }
    }

    /// Path of the POM inside a repository using the default layout,
    /// e.g. `org/example/lib/1.0/lib-1.0.pom`.
    pub fn pom_path(&self) -> Option<String> {
        let group_id = self.group_id.as_deref()?;
        let artifact_id = self.artifact_id.as_deref()?;
        let version = self.version.as_deref()?;
        Some(format!(
            "{}/{}/{}/{}-{}.pom",
            group_id.replace('.', "/"),
            artifact_id,
            version,
            artifact_id,
            version,
        ))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |p: &Option<String>| p.clone().unwrap_or_else(|| "?".to_string());
        write!(
            f,
            "{}:{}:{}",
            part(&self.group_id),
            part(&self.artifact_id),
            part(&self.version)
        )
    }
}

/// A decoded element that can declare coordinates of its own and may point at a `<parent>`.
pub trait CoordinateNode {
    fn group_id(&self) -> Option<&str>;
    fn artifact_id(&self) -> Option<&str>;
    fn version(&self) -> Option<&str>;

    fn parent(&self) -> Option<&dyn CoordinateNode> {
        None
    }
}

/// Effective coordinates of `node`. `groupId` and `version` fall back to the node's
/// declared parent when missing locally; `artifactId` is never inherited.
pub fn resolve_coordinates(node: &dyn CoordinateNode) -> Coordinates {
    let inherited = node.parent().map(resolve_coordinates);

    Coordinates {
        group_id: node
            .group_id()
            .map(str::to_string)
            .or_else(|| inherited.as_ref().and_then(|p| p.group_id.clone())),
        artifact_id: node.artifact_id().map(str::to_string),
        version: node
            .version()
            .map(str::to_string)
            .or_else(|| inherited.as_ref().and_then(|p| p.version.clone())),
    }
}
