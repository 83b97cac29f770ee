//! Project tool implementations

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::mcp::tools::{
    json_response, list_response, map_api_error, non_empty, optional_id, require_id,
    require_non_blank,
};
use crate::todoist::{NewProject, ProjectUpdate, TodoistApi};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectParams {
    #[schemars(description = "Project name")]
    pub name: String,
    #[schemars(description = "Parent project ID, to nest this project. Optional.")]
    pub parent_id: Option<String>,
    #[schemars(description = "Color name, e.g. 'berry_red', 'blue', 'grey'. Optional.")]
    pub color: Option<String>,
    #[schemars(description = "Mark the project as a favorite. Optional.")]
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectParams {
    #[schemars(description = "Project ID to update")]
    pub project_id: String,
    #[schemars(description = "New project name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New color name (optional)")]
    pub color: Option<String>,
    #[schemars(description = "Favorite flag (optional)")]
    pub is_favorite: Option<bool>,
}

/// Project management tools
///
/// Generic over `A: TodoistApi` so tests can inject a mock client.
pub struct ProjectTools<A: TodoistApi> {
    api: Arc<A>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<A: TodoistApi + 'static> ProjectTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "List all projects, including the Inbox, in Todoist order.")]
    pub async fn get_projects(&self) -> Result<CallToolResult, McpError> {
        let projects = self.api.get_projects().await.map_err(map_api_error)?;

        list_response(&projects)
    }

    #[tool(description = "Get a project by ID with color, parent, favorite and sharing flags.")]
    pub async fn get_project(
        &self,
        params: Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id(&params.0.project_id, "project_id")?;

        let project = self
            .api
            .get_project(&params.0.project_id)
            .await
            .map_err(map_api_error)?;

        json_response(&project)
    }

    #[tool(description = "Create a new project. Provide parent_id to nest it under another project.")]
    pub async fn create_project(
        &self,
        params: Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        require_non_blank(&p.name, "name")?;
        let parent_id = optional_id(p.parent_id, "parent_id")?;

        let project = NewProject {
            name: p.name,
            parent_id,
            color: non_empty(p.color),
            is_favorite: p.is_favorite,
        };

        let created = self
            .api
            .create_project(&project)
            .await
            .map_err(map_api_error)?;

        json_response(&created)
    }

    #[tool(description = "Rename a project, change its color, or toggle its favorite flag. Only provided fields change.")]
    pub async fn update_project(
        &self,
        params: Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        require_id(&p.project_id, "project_id")?;
        if let Some(name) = &p.name {
            require_non_blank(name, "name")?;
        }

        let update = ProjectUpdate {
            name: p.name,
            color: non_empty(p.color),
            is_favorite: p.is_favorite,
        };

        let updated = self
            .api
            .update_project(&p.project_id, &update)
            .await
            .map_err(map_api_error)?;

        json_response(&updated)
    }
}
