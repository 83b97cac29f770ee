//! MCP tool implementations
//!
//! Tool handlers are grouped by entity type, one struct per entity.
//! This module also holds the shared argument validation and response
//! helpers.

mod projects;
mod sections;
mod tasks;

#[cfg(test)]
mod tasks_test;

pub use projects::{
    CreateProjectParams, GetProjectParams, ProjectTools, UpdateProjectParams,
};
pub use sections::{GetSectionsParams, SectionTools};
pub use tasks::{
    CreateTaskParams, GetTaskParams, GetTasksParams, TaskIdParams, TaskTools, UpdateTaskParams,
};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::warn;

use crate::todoist::ApiError;

/// Deserialize a raw argument bag into a tool's parameter struct.
///
/// Missing required fields and type mismatches become a validation error
/// naming the offending field.
pub(crate) fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<JsonObject>,
) -> Result<T, McpError> {
    let value = serde_json::Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(value).map_err(|e| {
        let error = e.to_string();
        let mut data = json!({"kind": "validation", "error": error});
        if let Some(field) = offending_field(&error) {
            data["field"] = json!(field);
        }
        McpError::invalid_params(format!("Invalid arguments: {}", error), Some(data))
    })
}

/// Field named by a serde "unknown field" or "missing field" message.
fn offending_field(error: &str) -> Option<&str> {
    ["unknown field `", "missing field `"]
        .iter()
        .find_map(|prefix| error.strip_prefix(prefix))
        .and_then(|rest| rest.split('`').next())
}

/// Argument bag for tools that take no parameters.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NoArguments {}

pub(crate) fn validation_error(field: &str, reason: &str) -> McpError {
    McpError::invalid_params(
        format!("Invalid argument '{}': {}", field, reason),
        Some(json!({"kind": "validation", "field": field, "error": reason})),
    )
}

/// Todoist ids are opaque alphanumeric strings; anything else would change
/// the request path.
pub(crate) fn require_id(value: &str, field: &str) -> Result<(), McpError> {
    if value.is_empty() {
        return Err(validation_error(field, "must not be empty"));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(validation_error(
            field,
            "must contain only letters, digits, '-' or '_'",
        ));
    }
    Ok(())
}

/// An optional id: empty means absent, anything else must be a valid id.
pub(crate) fn optional_id(value: Option<String>, field: &str) -> Result<Option<String>, McpError> {
    let value = non_empty(value);
    if let Some(id) = &value {
        require_id(id, field)?;
    }
    Ok(value)
}

pub(crate) fn require_non_blank(value: &str, field: &str) -> Result<(), McpError> {
    if value.trim().is_empty() {
        return Err(validation_error(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn validate_priority(priority: Option<u8>) -> Result<(), McpError> {
    match priority {
        Some(p) if !(1..=4).contains(&p) => Err(validation_error(
            "priority",
            "must be between 1 (normal) and 4 (urgent)",
        )),
        _ => Ok(()),
    }
}

/// Todoist accepts a single due form per request.
pub(crate) fn validate_due(
    due_string: Option<&str>,
    due_date: Option<&str>,
) -> Result<(), McpError> {
    if due_string.is_some() && due_date.is_some() {
        return Err(validation_error(
            "due_date",
            "only one of due_string or due_date may be set",
        ));
    }
    Ok(())
}

/// Drop empty optional filters instead of forwarding them.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Convert a client failure into a structured MCP error.
pub(crate) fn map_api_error(error: ApiError) -> McpError {
    warn!(kind = error.kind(), %error, "Todoist call failed");
    let data = json!({
        "kind": error.kind(),
        "status": error.status(),
        "message": error.message(),
    });
    if error.is_not_found() {
        McpError::resource_not_found(error.to_string(), Some(data))
    } else {
        McpError::internal_error(error.to_string(), Some(data))
    }
}

pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_failed",
            Some(json!({"kind": "internal", "error": e.to_string()})),
        )
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// All items in one payload, in remote order.
pub(crate) fn list_response<T: Serialize>(items: &[T]) -> Result<CallToolResult, McpError> {
    json_response(&json!({
        "items": items,
        "total": items.len(),
    }))
}

pub(crate) fn text_response(message: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message)])
}
