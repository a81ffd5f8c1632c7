// Triad - persona-based assistant CLI
// Main entry point

use anyhow::Result;

use triad::cli::Repl;
use triad::config::load_config;
use triad::gateway::GptClient;
use triad::router::Router;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_config()?;

    // Create completion gateway
    let gateway = GptClient::new(&config)?;

    // Create command router
    let router = Router::new();

    // Create and run REPL
    let mut repl = Repl::new(gateway, router);

    repl.run().await?;

    Ok(())
}
