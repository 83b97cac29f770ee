//! MCP tools for Task management.

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
    require_non_blank, text_response, validate_due, validate_priority,
};
use crate::todoist::{NewTask, TaskQuery, TaskUpdate, TodoistApi};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetTasksParams {
    #[schemars(description = "Only tasks in this project")]
    pub project_id: Option<String>,
    #[schemars(description = "Only tasks in this section")]
    pub section_id: Option<String>,
    #[schemars(description = "Only tasks carrying this label name")]
    pub label: Option<String>,
    #[schemars(
        description = "Todoist filter query, e.g. 'today', 'overdue', 'p1', 'today | overdue'. Takes precedence over the other filters."
    )]
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

/// Shared by complete_task, reopen_task and delete_task.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TaskIdParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskParams {
    #[schemars(description = "Task title")]
    pub content: String,
    #[schemars(description = "Longer task description (markdown). Optional.")]
    pub description: Option<String>,
    #[schemars(
        description = "Project to add the task to. Defaults to the Inbox. Use get_projects to find IDs."
    )]
    pub project_id: Option<String>,
    #[schemars(description = "Section within the project. Use get_sections to find IDs.")]
    pub section_id: Option<String>,
    #[schemars(description = "Parent task ID, to create a subtask. Optional.")]
    pub parent_id: Option<String>,
    #[schemars(description = "Label names to attach. Optional.")]
    pub labels: Option<Vec<String>>,
    #[schemars(
        description = "Priority from 1 (normal) to 4 (urgent). Optional.",
        range(min = 1, max = 4)
    )]
    pub priority: Option<u8>,
    #[schemars(
        description = "Natural-language due date, e.g. 'tomorrow', 'next Monday', 'every friday'. Do not combine with due_date."
    )]
    pub due_string: Option<String>,
    #[schemars(description = "Due date in YYYY-MM-DD form. Do not combine with due_string.")]
    pub due_date: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID to update")]
    pub task_id: String,
    #[schemars(description = "New task title (optional)")]
    pub content: Option<String>,
    #[schemars(description = "New description (optional)")]
    pub description: Option<String>,
    #[schemars(description = "Label names (optional). Replaces all existing labels.")]
    pub labels: Option<Vec<String>>,
    #[schemars(
        description = "Priority from 1 (normal) to 4 (urgent) (optional)",
        range(min = 1, max = 4)
    )]
    pub priority: Option<u8>,
    #[schemars(description = "Natural-language due date (optional). Do not combine with due_date.")]
    pub due_string: Option<String>,
    #[schemars(description = "Due date in YYYY-MM-DD form (optional). Do not combine with due_string.")]
    pub due_date: Option<String>,
}

// =============================================================================
// Task Tools
// =============================================================================

pub struct TaskTools<A: TodoistApi> {
    api: Arc<A>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<A: TodoistApi + 'static> TaskTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(
        description = "List active tasks. Filter by project_id, section_id, label, or a Todoist filter query such as 'today' or 'overdue'. Returns all matching tasks in one response."
    )]
    pub async fn get_tasks(
        &self,
        params: Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let query = TaskQuery {
            project_id: non_empty(p.project_id),
            section_id: non_empty(p.section_id),
            label: non_empty(p.label),
            filter: non_empty(p.filter),
        };

        let tasks = self.api.get_tasks(&query).await.map_err(map_api_error)?;

        list_response(&tasks)
    }

    #[tool(description = "Get a task by ID with content, description, labels, priority, due date and completion state.")]
    pub async fn get_task(
        &self,
        params: Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id(&params.0.task_id, "task_id")?;

        let task = self
            .api
            .get_task(&params.0.task_id)
            .await
            .map_err(map_api_error)?;

        json_response(&task)
    }

    #[tool(
        description = "Create a new task. Only content is required. Without project_id the task lands in the Inbox. Provide either due_string or due_date, not both."
    )]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        require_non_blank(&p.content, "content")?;
        validate_priority(p.priority)?;
        validate_due(p.due_string.as_deref(), p.due_date.as_deref())?;

        let task = NewTask {
            project_id: optional_id(p.project_id, "project_id")?,
            section_id: optional_id(p.section_id, "section_id")?,
            parent_id: optional_id(p.parent_id, "parent_id")?,
            content: p.content,
            description: p.description,
            labels: p.labels,
            priority: p.priority,
            due_string: p.due_string,
            due_date: p.due_date,
        };

        let created = self.api.create_task(&task).await.map_err(map_api_error)?;

        json_response(&created)
    }

    #[tool(
        description = "Update a task's content, description, labels, priority or due date. Only provided fields change."
    )]
    pub async fn update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        require_id(&p.task_id, "task_id")?;
        if let Some(content) = &p.content {
            require_non_blank(content, "content")?;
        }
        validate_priority(p.priority)?;
        validate_due(p.due_string.as_deref(), p.due_date.as_deref())?;

        let update = TaskUpdate {
            content: p.content,
            description: p.description,
            labels: p.labels,
            priority: p.priority,
            due_string: p.due_string,
            due_date: p.due_date,
        };

        let updated = self
            .api
            .update_task(&p.task_id, &update)
            .await
            .map_err(map_api_error)?;

        json_response(&updated)
    }

    #[tool(
        description = "Mark a task as completed. Recurring tasks advance to their next occurrence instead."
    )]
    pub async fn complete_task(
        &self,
        params: Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id(&params.0.task_id, "task_id")?;

        self.api
            .complete_task(&params.0.task_id)
            .await
            .map_err(map_api_error)?;

        Ok(text_response(format!(
            "Task {} completed successfully",
            params.0.task_id
        )))
    }

    #[tool(description = "Reopen a completed task.")]
    pub async fn reopen_task(
        &self,
        params: Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id(&params.0.task_id, "task_id")?;

        self.api
            .reopen_task(&params.0.task_id)
            .await
            .map_err(map_api_error)?;

        Ok(text_response(format!(
            "Task {} reopened successfully",
            params.0.task_id
        )))
    }

    #[tool(description = "Delete a task permanently. Prefer complete_task for finished work.")]
    pub async fn delete_task(
        &self,
        params: Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id(&params.0.task_id, "task_id")?;

        self.api
            .delete_task(&params.0.task_id)
            .await
            .map_err(map_api_error)?;

        Ok(text_response(format!(
            "Task {} deleted successfully",
            params.0.task_id
        )))
    }
}
