use crate::coordinates::{resolve_coordinates, Coordinates};
use crate::dependencies::read_dependencies;
use crate::dependency::Dependency;
use crate::parent::ParentReference;
use crate::project::ProjectNode;
use crate::repository::{read_repositories, Repository};
use serde::Serialize;

/// A parsed POM, with its resolved ancestors attached through `parent_pom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentReference>,
    pub dependencies: Vec<Dependency>,
    pub repositories: Vec<Repository>,
    /// The parent's descriptor. Absent when no parent is declared, when there is no
    /// repository to search, or when the parent could not be fetched or parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_pom: Option<Box<Descriptor>>,
}

impl Descriptor {
    /// Builds the descriptor of `project` around an already resolved parent descriptor.
    pub fn assemble(project: &ProjectNode, parent_pom: Option<Descriptor>) -> Self {
        Self {
            coordinates: resolve_coordinates(project),
            parent: project.parent.as_ref().map(ParentReference::from),
            dependencies: read_dependencies(project),
            repositories: read_repositories(project),
            parent_pom: parent_pom.map(Box::new),
        }
    }

    /// Resolved ancestors, immediate parent first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Descriptor> {
        std::iter::successors(self.parent_pom.as_deref(), |d| d.parent_pom.as_deref())
    }

    pub fn group_id(&self) -> Option<&str> {
        self.coordinates.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.coordinates.artifact_id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.coordinates.version.as_deref()
    }
}
