use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sqlpane::{server, HttpQuerySource};

/// Web console for an ad-hoc SQL query service.
#[derive(Parser, Debug)]
#[command(name = "sqlpane", version, about)]
struct Cli {
    /// URL of the query endpoint
    #[arg(
        long,
        env = "SQLPANE_ENDPOINT",
        default_value = "http://localhost:3001/api/query"
    )]
    endpoint: String,

    /// Address to bind the console on
    #[arg(short, long, env = "SQLPANE_ADDRESS", default_value = "127.0.0.1:3000")]
    address: String,
}

#[tokio::main]
async fn main() -> sqlpane::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let source = Arc::new(HttpQuerySource::new(cli.endpoint));
    server::run(&cli.address, source).await
}
