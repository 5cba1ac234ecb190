use crate::coordinates::Coordinates;
use thiserror::Error;

/// Errors that reject a top-level parse. Only malformed root input ends up here;
/// anything that goes wrong while resolving ancestors is swallowed.
#[derive(Debug, Error)]
pub enum PomError {
    #[error("malformed POM XML: {0}")]
    Reader(#[from] quick_xml::Error),

    #[error("POM XML does not match the project layout: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("expected a <project> root element, found <{found}>")]
    NotAProject { found: String },

    #[error("POM text has a second root element <{second}>")]
    MultipleRoots { second: String },

    #[error("POM text contains no root element")]
    Empty,
}

/// Errors raised by a [`ParentFetcher`](crate::fetch::ParentFetcher).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parent coordinates are incomplete: {0}")]
    IncompleteCoordinates(Coordinates),

    #[error("refusing to read outside the local repository: {0}")]
    UnsafePath(String),

    #[error("could not locate a local Maven repository")]
    NoLocalRepository,

    #[error("{0}")]
    Other(String),
}

/// Errors that can occur while loading configuration or building a parser from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,

    #[error("could not set up parent fetcher: {0}")]
    Fetcher(#[from] FetchError),
}
