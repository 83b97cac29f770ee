//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::todoist::TodoistApi;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// Every session gets its own `McpServer`; all of them share the same client.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
///
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use todoist_mcp::config::Config;
/// # use todoist_mcp::mcp::create_mcp_service;
/// # use todoist_mcp::todoist::TodoistClient;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let config = Config::new(Some("token".to_string()), None)?;
/// let client = Arc::new(TodoistClient::new(&config)?);
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(client, ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service<A: TodoistApi + 'static>(
    api: Arc<A>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<A>, LocalSessionManager> {
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory =
        move || -> Result<McpServer<A>, std::io::Error> { Ok(McpServer::new(Arc::clone(&api))) };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
