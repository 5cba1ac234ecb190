use clap::Parser;
use pom_resolver::{PomParser, ResolverConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Parse a POM file and print it, with its resolved parent chain, as JSON.
#[derive(Debug, Parser)]
#[command(name = "pom-resolver", version)]
struct Cli {
    /// Path to the pom.xml to parse
    path: PathBuf,

    /// Only look for parent POMs in the local repository
    #[arg(long)]
    offline: bool,

    /// Look in the local repository before the declared remote repositories
    #[arg(long)]
    prefer_local: bool,

    /// Maximum number of ancestors to resolve
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to parse POM");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ResolverConfig::load()?;
    config.offline |= cli.offline;
    config.prefer_local |= cli.prefer_local;
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    let parser = PomParser::from_config(&config)?;

    let xml = tokio::fs::read_to_string(&cli.path)
        .await
        .map_err(|e| format!("cannot read {}: {}", cli.path.display(), e))?;
    let descriptor = parser.parse(&xml).await?;

    let json = if cli.compact {
        serde_json::to_string(&descriptor)?
    } else {
        serde_json::to_string_pretty(&descriptor)?
    };
    println!("{json}");
    Ok(())
}
