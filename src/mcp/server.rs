//! MCP server implementation
//!
//! This module implements the server coordinator: it owns the per-entity tool
//! handlers, serves the tool catalog and dispatches tool calls.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::wrapper::Parameters,
    model::{
        CallToolRequestParam, CallToolResult, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::todoist::TodoistApi;

use super::catalog::ToolName;
use super::tools::{NoArguments, ProjectTools, SectionTools, TaskTools, parse_arguments};

const INSTRUCTIONS: &str = "Todoist MCP Server - List, create, update, complete, reopen and delete \
tasks; list, create and update projects; list sections. Use get_projects and get_sections to \
discover IDs before filtering or creating tasks.";

/// Main MCP server coordinator
///
/// Generic over `A: TodoistApi` (no dynamic dispatch). The server holds no
/// mutable state; concurrent tool calls share only the immutable client.
pub struct McpServer<A: TodoistApi> {
    task_tools: TaskTools<A>,
    project_tools: ProjectTools<A>,
    section_tools: SectionTools<A>,
}

impl<A: TodoistApi + 'static> McpServer<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            task_tools: TaskTools::new(Arc::clone(&api)),
            project_tools: ProjectTools::new(Arc::clone(&api)),
            section_tools: SectionTools::new(api),
        }
    }

    /// Tool descriptors (name, description, input schema) for the whole catalog.
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = self.task_tools.router().list_all();
        tools.extend(self.project_tools.router().list_all());
        tools.extend(self.section_tools.router().list_all());
        tools
    }

    /// Run one tool invocation.
    ///
    /// Unknown names and invalid arguments are rejected before any outbound
    /// call. Every outcome is either a tool result or a structured error.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let tool: ToolName = name.parse().map_err(|message: String| {
            McpError::invalid_params(message, Some(json!({"kind": "unknown_tool", "tool": name})))
        })?;
        debug!(%tool, "Dispatching tool call");

        let result = match tool {
            ToolName::GetTasks => {
                let params = parse_arguments(arguments)?;
                self.task_tools.get_tasks(Parameters(params)).await
            }
            ToolName::GetTask => {
                let params = parse_arguments(arguments)?;
                self.task_tools.get_task(Parameters(params)).await
            }
            ToolName::CreateTask => {
                let params = parse_arguments(arguments)?;
                self.task_tools.create_task(Parameters(params)).await
            }
            ToolName::UpdateTask => {
                let params = parse_arguments(arguments)?;
                self.task_tools.update_task(Parameters(params)).await
            }
            ToolName::CompleteTask => {
                let params = parse_arguments(arguments)?;
                self.task_tools.complete_task(Parameters(params)).await
            }
            ToolName::ReopenTask => {
                let params = parse_arguments(arguments)?;
                self.task_tools.reopen_task(Parameters(params)).await
            }
            ToolName::DeleteTask => {
                let params = parse_arguments(arguments)?;
                self.task_tools.delete_task(Parameters(params)).await
            }
            ToolName::GetProjects => {
                parse_arguments::<NoArguments>(arguments)?;
                self.project_tools.get_projects().await
            }
            ToolName::GetProject => {
                let params = parse_arguments(arguments)?;
                self.project_tools.get_project(Parameters(params)).await
            }
            ToolName::CreateProject => {
                let params = parse_arguments(arguments)?;
                self.project_tools.create_project(Parameters(params)).await
            }
            ToolName::UpdateProject => {
                let params = parse_arguments(arguments)?;
                self.project_tools.update_project(Parameters(params)).await
            }
            ToolName::GetSections => {
                let params = parse_arguments(arguments)?;
                self.section_tools.get_sections(Parameters(params)).await
            }
        };

        if let Err(e) = &result {
            warn!(%tool, code = e.code.0, message = %e.message, "Tool call failed");
        }
        result
    }
}

impl<A: TodoistApi + 'static> ServerHandler for McpServer<A> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions(INSTRUCTIONS.to_string())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            meta: None,
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }
}
