use crate::dependency::{Dependency, DependencyNode};
use crate::project::ProjectNode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Dependencies {
    #[serde(rename = "dependency")]
    #[serde(default)]
    pub dependency: Vec<DependencyNode>,
}

/// Dependencies declared directly by `project`, in declaration order.
/// Empty when there is no `<dependencies>` block.
pub fn read_dependencies(project: &ProjectNode) -> Vec<Dependency> {
    project
        .dependencies
        .as_ref()
        .map(|deps| deps.dependency.iter().map(Dependency::from).collect())
        .unwrap_or_default()
}
