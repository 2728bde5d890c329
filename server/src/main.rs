// ABOUTME: Entry point for the Atlassian MCP server binary.
// ABOUTME: Reads configuration, installs stderr logging and serves MCP on stdio.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atlassian_mcp::prelude::*;

/// MCP server exposing Jira work item tools through the Atlassian CLI.
#[derive(Debug, Parser)]
#[command(name = "atlassian-mcp", version)]
struct Cli {
    /// Jira site, e.g. your-company.atlassian.net
    #[arg(long, env = "JIRA_SITE")]
    site: Option<String>,

    /// Operator email the CLI is authenticated as
    #[arg(long, env = "JIRA_EMAIL")]
    email: Option<String>,

    /// Log verbosity: trace, debug, info, warn or error
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: LogLevel,

    /// Path or name of the Atlassian CLI executable
    #[arg(long = "acli", env = "ACLI_BIN", default_value = atlassian_mcp::config::DEFAULT_PROGRAM)]
    program: String,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            site: self.site,
            email: self.email,
            log_level: self.log_level,
            program: self.program,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Cli::parse().into_config();

    // Stdout carries the protocol, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    info!(
        site = config.site.as_deref().unwrap_or("<unset>"),
        email = config.email.as_deref().unwrap_or("<unset>"),
        program = %config.program,
        "Atlassian MCP Server started"
    );

    let server = McpServer::new(Dispatcher::jira(config));
    StdioTransport::stdio()
        .serve(server)
        .await
        .context("MCP transport failed")?;

    info!("input closed, shutting down");
    Ok(())
}
