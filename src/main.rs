//! NutriSense
//!
//! An MCP server for nutrition tracking and health metrics.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutrisense::build_info;
use nutrisense::config::Config;
use nutrisense::mcp::NutriSenseService;
use nutrisense::session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays free for the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrisense=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env()?;
    let profile = config.load_profile()?;
    let today = config.today();
    tracing::info!(profile_id = %profile.id, %today, "Session ready");

    let session = Session::new(profile, today);
    let service = NutriSenseService::new(session, config.profile_path.clone());

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
