//! Fixed tool catalog.

use std::fmt;
use std::str::FromStr;

/// Every tool the server exposes. Dispatch matches on this enum, so adding a
/// tool without wiring it up fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetTasks,
    GetTask,
    CreateTask,
    UpdateTask,
    CompleteTask,
    ReopenTask,
    DeleteTask,
    GetProjects,
    GetProject,
    CreateProject,
    UpdateProject,
    GetSections,
}

impl ToolName {
    pub const ALL: [ToolName; 12] = [
        ToolName::GetTasks,
        ToolName::GetTask,
        ToolName::CreateTask,
        ToolName::UpdateTask,
        ToolName::CompleteTask,
        ToolName::ReopenTask,
        ToolName::DeleteTask,
        ToolName::GetProjects,
        ToolName::GetProject,
        ToolName::CreateProject,
        ToolName::UpdateProject,
        ToolName::GetSections,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetTasks => "get_tasks",
            ToolName::GetTask => "get_task",
            ToolName::CreateTask => "create_task",
            ToolName::UpdateTask => "update_task",
            ToolName::CompleteTask => "complete_task",
            ToolName::ReopenTask => "reopen_task",
            ToolName::DeleteTask => "delete_task",
            ToolName::GetProjects => "get_projects",
            ToolName::GetProject => "get_project",
            ToolName::CreateProject => "create_project",
            ToolName::UpdateProject => "update_project",
            ToolName::GetSections => "get_sections",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| format!("Unknown tool: {}", s))
    }
}
