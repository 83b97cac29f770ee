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

use crate::mcp::tools::{list_response, map_api_error, non_empty};
use crate::todoist::{SectionQuery, TodoistApi};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetSectionsParams {
    #[schemars(description = "Only sections of this project. Omit to list sections of all projects.")]
    pub project_id: Option<String>,
}

/// Read-only section tools.
pub struct SectionTools<A: TodoistApi> {
    api: Arc<A>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<A: TodoistApi + 'static> SectionTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "List sections, optionally limited to one project.")]
    pub async fn get_sections(
        &self,
        params: Parameters<GetSectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = SectionQuery {
            project_id: non_empty(params.0.project_id),
        };

        let sections = self
            .api
            .get_sections(&query)
            .await
            .map_err(map_api_error)?;

        list_response(&sections)
    }
}
