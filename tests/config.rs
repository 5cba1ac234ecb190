//! Parsers built from `ResolverConfig`: fetcher selection and validation.

use axum::routing::get;
use axum::Router;
use pom_resolver::{ConfigError, PomParser, ResolverConfig};
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;

const MIDDLE: &str = include_str!("data/chain-middle.xml");
const ROOT: &str = include_str!("data/chain-root.xml");

fn child_pom(repository_url: &str) -> String {
    format!(
        "<project>\
            <parent><groupId>org.example.platform</groupId><artifactId>middle</artifactId><version>3.0.0</version></parent>\
            <artifactId>leaf</artifactId>\
            <repositories><repository><url>{repository_url}</url></repository></repositories>\
        </project>"
    )
}

fn local_repository_with_chain(root: &Path) {
    for (path, xml) in [
        ("org/example/platform/middle/3.0.0/middle-3.0.0.pom", MIDDLE),
        ("org/example/root/1.0.0/root-1.0.0.pom", ROOT),
    ] {
        let file = root.join(path);
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(file, xml).unwrap();
    }
}

/// Serves the middle POM over HTTP so a test can tell whether remote lookups happened.
async fn start_remote() -> SocketAddr {
    let app = Router::new().route(
        "/org/example/platform/middle/3.0.0/middle-3.0.0.pom",
        get(|| async { MIDDLE }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

#[tokio::test]
async fn offline_resolves_chain_from_local_repository() {
    let dir = tempfile::tempdir().unwrap();
    local_repository_with_chain(dir.path());
    let config = ResolverConfig {
        offline: true,
        local_repository: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let parser = PomParser::from_config(&config).unwrap();
    let unreachable = format!("http://{}", closed_port().await);
    let descriptor = parser.parse(&child_pom(&unreachable)).await.unwrap();

    let names: Vec<_> = descriptor.ancestors().filter_map(|d| d.artifact_id()).collect();
    assert_eq!(names, vec!["middle", "root"]);
}

#[tokio::test]
async fn offline_never_asks_remote_repositories() {
    let dir = tempfile::tempdir().unwrap();
    let remote = start_remote().await;
    let config = ResolverConfig {
        offline: true,
        local_repository: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let parser = PomParser::from_config(&config).unwrap();
    let descriptor = parser
        .parse(&child_pom(&format!("http://{remote}")))
        .await
        .unwrap();

    assert!(descriptor.parent.is_some());
    assert!(descriptor.parent_pom.is_none());
}

#[tokio::test]
async fn prefer_local_takes_local_copy_first() {
    let dir = tempfile::tempdir().unwrap();
    local_repository_with_chain(dir.path());
    let config = ResolverConfig {
        prefer_local: true,
        local_repository: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let parser = PomParser::from_config(&config).unwrap();
    let unreachable = format!("http://{}", closed_port().await);
    let descriptor = parser.parse(&child_pom(&unreachable)).await.unwrap();

    let middle = descriptor.parent_pom.as_deref().unwrap();
    assert_eq!(middle.artifact_id(), Some("middle"));
    assert_eq!(
        middle.parent_pom.as_deref().and_then(|d| d.artifact_id()),
        Some("root")
    );
}

#[tokio::test]
async fn configured_max_depth_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    local_repository_with_chain(dir.path());
    let config = ResolverConfig {
        offline: true,
        max_depth: 1,
        local_repository: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let parser = PomParser::from_config(&config).unwrap();
    let descriptor = parser
        .parse(&child_pom("https://repo.example.org"))
        .await
        .unwrap();

    assert_eq!(descriptor.ancestors().count(), 1);
}

#[test]
fn zero_max_depth_is_rejected() {
    let config = ResolverConfig {
        max_depth: 0,
        ..Default::default()
    };

    assert!(matches!(
        PomParser::from_config(&config),
        Err(ConfigError::InvalidMaxDepth)
    ));
}
