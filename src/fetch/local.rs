use super::ParentFetcher;
use crate::error::FetchError;
use crate::parent::ParentInformation;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Looks parent POMs up in a Maven local repository (`~/.m2/repository` by default).
#[derive(Debug, Clone)]
pub struct LocalRepositoryFetcher {
    root: PathBuf,
}

impl LocalRepositoryFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The current user's `~/.m2/repository`.
    pub fn user_default() -> Result<Self, FetchError> {
        let mut path = dirs::home_dir().ok_or(FetchError::NoLocalRepository)?;
        path.push(".m2");
        path.push("repository");
        Ok(Self::new(path))
    }
}

#[async_trait]
impl ParentFetcher for LocalRepositoryFetcher {
    async fn find_parent(
        &self,
        information: &ParentInformation,
    ) -> Result<Option<String>, FetchError> {
        let coordinates = &information.artifact_coordinates;
        let pom_path = coordinates
            .pom_path()
            .ok_or_else(|| FetchError::IncompleteCoordinates(coordinates.clone()))?;
        // coordinates come from fetched POMs and must stay below the root
        if !Path::new(&pom_path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(FetchError::UnsafePath(pom_path));
        }
        let path = self.root.join(pom_path);

        match fs::read_to_string(&path).await {
            Ok(xml) => {
                debug!(path = %path.display(), "found parent POM in local repository");
                Ok(Some(xml))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "parent POM not in local repository");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Coordinates;

    fn information(coordinates: Coordinates) -> ParentInformation {
        ParentInformation {
            artifact_coordinates: coordinates,
            relative_path: None,
            repositories: Vec::new(),
        }
    }

    #[tokio::test]
    async fn reads_pom_from_repository_layout() {
        let dir = tempfile::tempdir().unwrap();
        let pom_dir = dir.path().join("org/example/base/2.0");
        std::fs::create_dir_all(&pom_dir).unwrap();
        std::fs::write(pom_dir.join("base-2.0.pom"), "<project/>").unwrap();

        let fetcher = LocalRepositoryFetcher::new(dir.path());
        let found = fetcher
            .find_parent(&information(Coordinates::new("org.example", "base", "2.0")))
            .await
            .unwrap();

        assert_eq!(found.as_deref(), Some("<project/>"));
    }

    #[tokio::test]
    async fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalRepositoryFetcher::new(dir.path());

        let found = fetcher
            .find_parent(&information(Coordinates::new("org.example", "absent", "1.0")))
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn incomplete_coordinates_fail() {
        let fetcher = LocalRepositoryFetcher::new("/nonexistent");
        let result = fetcher.find_parent(&information(Coordinates::default())).await;
        assert!(matches!(result, Err(FetchError::IncompleteCoordinates(_))));
    }

    #[tokio::test]
    async fn coordinates_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalRepositoryFetcher::new(dir.path().join("repository"));

        for coordinates in [
            Coordinates::new("/etc", "passwd", "1"),
            Coordinates::new("org.example", "..", "1"),
            Coordinates::new("org.example", "lib", "../../.."),
        ] {
            let result = fetcher.find_parent(&information(coordinates)).await;
            assert!(matches!(result, Err(FetchError::UnsafePath(_))));
        }
    }
}
