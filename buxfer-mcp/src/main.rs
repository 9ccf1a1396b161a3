//! MCP server entry point for the Buxfer adapter.
//!
//! Starts the server on stdio transport. The credential is read from the
//! `BUXFER_TOKEN` environment variable exactly once, before serving; its
//! absence is a startup warning, not a startup failure, because every tool
//! call checks the credential itself and reports a per-call error.

mod format;
mod schemas;
mod server;

use std::process::ExitCode;

use buxfer_client::BuxferClient;
use rmcp::ServiceExt;
use server::BuxferMcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting Buxfer MCP server");

    let token = std::env::var("BUXFER_TOKEN")
        .ok()
        .filter(|t| !t.is_empty());
    if token.is_none() {
        tracing::warn!("BUXFER_TOKEN not set - server will not be able to make API calls");
    }

    let mcp_server = BuxferMcp::new(BuxferClient::new(token));

    tracing::info!("MCP server initialized with 3 tools");

    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
