//! flowq - a one-shot Athena query runner for VPC flow log tables.

mod cli;

use cli::Cli;
use flowq::athena::AthenaClient;
use flowq::config::QuerySpec;
use flowq::error::Result;
use flowq::runner::QueryRunner;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let _cli = Cli::parse_args();

    let spec = QuerySpec::default();
    info!("Submitting query against database: {}", spec.database);

    let client = AthenaClient::from_env().await;
    let runner = QueryRunner::new(&client);
    let outcome = runner.run(&spec).await?;

    // Raw dump of the final state and the first result page, nothing more.
    println!("Query State: {}", outcome.state);
    println!("{:?}", outcome.results.rows);

    Ok(())
}
