//! Linear MCP Server
//!
//! Issue and comment operations for Linear, served over stdio.
//!
//! # Configuration
//! Set `LINEAR_API_KEY` env var or configure in `~/.binks/linear.toml`

use std::path::PathBuf;

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};

use linear_mcp::config::Config;
use linear_mcp::linear::Session;
use linear_mcp::LinearMcpServer;

#[derive(Parser)]
#[command(name = "linear-mcp")]
#[command(about = "MCP server for Linear issues and comments")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "LINEAR_MCP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    mcp_common::init_tracing("linear_mcp")?;

    tracing::info!("Starting Linear MCP Server");

    let config = Config::load(cli.config.as_deref())?;
    tracing::info!("Linear API URL: {}", config.linear.api_url);

    let session = Session::from_config(&config.linear)?;
    let server = LinearMcpServer::new(session);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
