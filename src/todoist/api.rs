//! Trait seam between the tool layer and the HTTP client.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{
    ApiResult, NewProject, NewTask, Project, ProjectUpdate, Section, SectionQuery, Task,
    TaskQuery, TaskUpdate,
};

/// Remote Todoist operations. Each call maps to exactly one HTTP request.
///
/// Implemented by [`super::TodoistClient`]; mocked in tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TodoistApi: Send + Sync {
    /// List active tasks matching the query, in remote order.
    async fn get_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<Task>>;

    async fn get_task(&self, task_id: &str) -> ApiResult<Task>;

    async fn create_task(&self, task: &NewTask) -> ApiResult<Task>;

    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> ApiResult<Task>;

    /// Close a task. Recurring tasks move to their next occurrence.
    async fn complete_task(&self, task_id: &str) -> ApiResult<()>;

    async fn reopen_task(&self, task_id: &str) -> ApiResult<()>;

    async fn delete_task(&self, task_id: &str) -> ApiResult<()>;

    async fn get_projects(&self) -> ApiResult<Vec<Project>>;

    async fn get_project(&self, project_id: &str) -> ApiResult<Project>;

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project>;

    async fn update_project(
        &self,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> ApiResult<Project>;

    async fn get_sections(&self, query: &SectionQuery) -> ApiResult<Vec<Section>>;
}
