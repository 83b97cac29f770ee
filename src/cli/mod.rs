pub mod error;


use std::net::IpAddr;
use std::sync::Arc;

use axum::Router;
use clap::{Parser, ValueEnum};
use rmcp::{ServiceExt, transport::stdio};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_API_URL};
use crate::mcp::{McpServer, create_mcp_service};
use crate::todoist::TodoistClient;

use self::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Line-delimited JSON-RPC over stdin/stdout (what desktop MCP hosts launch)
    Stdio,
    /// MCP Streamable HTTP, mounted at /mcp
    Http,
}

#[derive(Debug, Parser)]
#[command(name = "todoist-mcp")]
#[command(author, version, about = "Todoist MCP server", long_about = None)]
pub struct Cli {
    /// Todoist API token
    #[arg(long, env = "TODOIST_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the Todoist REST API base URL
    #[arg(long, env = "TODOIST_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// MCP transport to serve
    #[arg(long, env = "TODOIST_MCP_TRANSPORT", value_enum, default_value = "stdio")]
    pub transport: Transport,

    /// Host address to bind to (http transport only)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on (http transport only)
    #[arg(short, long, default_value = "3738")]
    pub port: u16,
}

/// Initialize tracing subscriber with env filter
///
/// Logs go to stderr: stdout belongs to the stdio transport.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todoist_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    // reqwest is built without a bundled provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = Config::new(cli.token, Some(cli.api_url))?;
    let client = Arc::new(TodoistClient::new(&config)?);
    info!(api_url = config.api_url(), "Todoist client initialized");

    match cli.transport {
        Transport::Stdio => serve_stdio(client).await,
        Transport::Http => serve_http(client, cli.host, cli.port).await,
    }
}

async fn serve_stdio(client: Arc<TodoistClient>) -> CliResult<()> {
    info!("Serving MCP over stdio");

    let service = McpServer::new(client)
        .serve(stdio())
        .await
        .map_err(|e| CliError::Serve {
            message: e.to_string(),
        })?;

    let reason = service.waiting().await.map_err(|e| CliError::Serve {
        message: e.to_string(),
    })?;
    info!(?reason, "MCP session ended");
    Ok(())
}

async fn serve_http(client: Arc<TodoistClient>, host: IpAddr, port: u16) -> CliResult<()> {
    let ct = CancellationToken::new();
    let app = Router::new()
        .nest_service("/mcp", create_mcp_service(client, ct.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down...");
            ct.cancel();
        })
        .await
        .map_err(|e| CliError::Serve {
            message: e.to_string(),
        })
}
