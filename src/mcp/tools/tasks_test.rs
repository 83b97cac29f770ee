//! Tests for Task MCP tools

use crate::mcp::tools::tasks::{
    CreateTaskParams, GetTaskParams, GetTasksParams, TaskIdParams, TaskTools, UpdateTaskParams,
};
use crate::todoist::fixtures::sample_task;
use crate::todoist::{ApiError, MockTodoistApi, NewTask, TaskQuery, TaskUpdate};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode, RawContent};
use std::sync::Arc;

fn content_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

#[tokio::test]
async fn test_get_tasks_forwards_filters() {
    let mut api = MockTodoistApi::new();
    api.expect_get_tasks()
        .withf(|query| {
            *query
                == TaskQuery {
                    project_id: Some("123".to_string()),
                    section_id: None,
                    label: Some("urgent".to_string()),
                    filter: None,
                }
        })
        .times(1)
        .returning(|_| Ok(vec![sample_task("1", "Fix roof"), sample_task("2", "Paint fence")]));
    let tools = TaskTools::new(Arc::new(api));

    let params = GetTasksParams {
        project_id: Some("123".to_string()),
        label: Some("urgent".to_string()),
        ..Default::default()
    };
    let result = tools
        .get_tasks(Parameters(params))
        .await
        .expect("get_tasks should succeed");

    let json: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"][0]["content"], "Fix roof");
    assert_eq!(json["items"][1]["content"], "Paint fence");
}

#[tokio::test]
async fn test_get_tasks_drops_empty_filters() {
    let mut api = MockTodoistApi::new();
    api.expect_get_tasks()
        .withf(|query| *query == TaskQuery::default())
        .times(1)
        .returning(|_| Ok(vec![]));
    let tools = TaskTools::new(Arc::new(api));

    let params = GetTasksParams {
        project_id: Some(String::new()),
        filter: Some(String::new()),
        ..Default::default()
    };
    let result = tools.get_tasks(Parameters(params)).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(json["total"], 0);
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_task() {
    let mut api = MockTodoistApi::new();
    api.expect_get_task()
        .withf(|task_id| task_id == "42")
        .times(1)
        .returning(|_| Ok(sample_task("42", "Buy milk")));
    let tools = TaskTools::new(Arc::new(api));

    let result = tools
        .get_task(Parameters(GetTaskParams {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(json["id"], "42");
    assert_eq!(json["content"], "Buy milk");
    assert_eq!(json["is_completed"], false);
}

#[tokio::test]
async fn test_get_task_not_found() {
    let mut api = MockTodoistApi::new();
    api.expect_get_task().times(1).returning(|_| {
        Err(ApiError::Remote {
            status: 404,
            message: "Task not found".to_string(),
        })
    });
    let tools = TaskTools::new(Arc::new(api));

    let err = tools
        .get_task(Parameters(GetTaskParams {
            task_id: "999".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    let data = err.data.unwrap();
    assert_eq!(data["kind"], "remote_service");
    assert_eq!(data["status"], 404);
    assert_eq!(data["message"], "Task not found");
}

#[tokio::test]
async fn test_get_task_rejects_path_like_id() {
    // No expectations: any outbound call would panic.
    let tools = TaskTools::new(Arc::new(MockTodoistApi::new()));

    let err = tools
        .get_task(Parameters(GetTaskParams {
            task_id: "../projects".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.data.unwrap()["field"], "task_id");
}

#[tokio::test]
async fn test_create_task_maps_all_fields() {
    let mut api = MockTodoistApi::new();
    api.expect_create_task()
        .withf(|task| {
            *task
                == NewTask {
                    content: "Buy milk".to_string(),
                    description: Some("2 liters".to_string()),
                    project_id: Some("123".to_string()),
                    section_id: Some("7".to_string()),
                    parent_id: Some("41".to_string()),
                    labels: Some(vec!["errands".to_string()]),
                    priority: Some(3),
                    due_string: Some("tomorrow".to_string()),
                    due_date: None,
                }
        })
        .times(1)
        .returning(|_| Ok(sample_task("42", "Buy milk")));
    let tools = TaskTools::new(Arc::new(api));

    let params = CreateTaskParams {
        content: "Buy milk".to_string(),
        description: Some("2 liters".to_string()),
        project_id: Some("123".to_string()),
        section_id: Some("7".to_string()),
        parent_id: Some("41".to_string()),
        labels: Some(vec!["errands".to_string()]),
        priority: Some(3),
        due_string: Some("tomorrow".to_string()),
        due_date: None,
    };
    let result = tools.create_task(Parameters(params)).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(json["id"], "42");
}

#[tokio::test]
async fn test_create_task_rejects_out_of_range_priority() {
    let tools = TaskTools::new(Arc::new(MockTodoistApi::new()));

    for priority in [0, 5] {
        let params = CreateTaskParams {
            content: "Buy milk".to_string(),
            priority: Some(priority),
            ..Default::default()
        };
        let err = tools.create_task(Parameters(params)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        let data = err.data.unwrap();
        assert_eq!(data["kind"], "validation");
        assert_eq!(data["field"], "priority");
    }
}

#[tokio::test]
async fn test_create_task_rejects_both_due_forms() {
    let tools = TaskTools::new(Arc::new(MockTodoistApi::new()));

    let params = CreateTaskParams {
        content: "Buy milk".to_string(),
        due_string: Some("tomorrow".to_string()),
        due_date: Some("2025-06-01".to_string()),
        ..Default::default()
    };
    let err = tools.create_task(Parameters(params)).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_create_task_rejects_blank_content() {
    let tools = TaskTools::new(Arc::new(MockTodoistApi::new()));

    let params = CreateTaskParams {
        content: "   ".to_string(),
        ..Default::default()
    };
    let err = tools.create_task(Parameters(params)).await.unwrap_err();

    assert_eq!(err.data.unwrap()["field"], "content");
}

#[tokio::test]
async fn test_create_task_rejects_malformed_parent_ids() {
    let tools = TaskTools::new(Arc::new(MockTodoistApi::new()));

    for (field, params) in [
        (
            "project_id",
            CreateTaskParams {
                content: "Pay rent".to_string(),
                project_id: Some("../projects".to_string()),
                ..Default::default()
            },
        ),
        (
            "section_id",
            CreateTaskParams {
                content: "Pay rent".to_string(),
                section_id: Some("7 8".to_string()),
                ..Default::default()
            },
        ),
        (
            "parent_id",
            CreateTaskParams {
                content: "Pay rent".to_string(),
                parent_id: Some("42?x=1".to_string()),
                ..Default::default()
            },
        ),
    ] {
        let err = tools.create_task(Parameters(params)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data.unwrap()["field"], field);
    }
}

#[tokio::test]
async fn test_update_task_sends_partial_update() {
    let mut api = MockTodoistApi::new();
    api.expect_update_task()
        .withf(|task_id, update| {
            task_id == "42"
                && *update
                    == TaskUpdate {
                        priority: Some(4),
                        labels: Some(vec![]),
                        ..Default::default()
                    }
        })
        .times(1)
        .returning(|_, _| {
            let mut task = sample_task("42", "Buy milk");
            task.priority = 4;
            Ok(task)
        });
    let tools = TaskTools::new(Arc::new(api));

    let params = UpdateTaskParams {
        task_id: "42".to_string(),
        priority: Some(4),
        labels: Some(vec![]),
        ..Default::default()
    };
    let result = tools.update_task(Parameters(params)).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(json["priority"], 4);
}

#[tokio::test]
async fn test_update_task_requires_task_id() {
    let tools = TaskTools::new(Arc::new(MockTodoistApi::new()));

    let params = UpdateTaskParams {
        content: Some("New title".to_string()),
        ..Default::default()
    };
    let err = tools.update_task(Parameters(params)).await.unwrap_err();

    assert_eq!(err.data.unwrap()["field"], "task_id");
}

#[tokio::test]
async fn test_complete_task_twice_reports_success_both_times() {
    let mut api = MockTodoistApi::new();
    api.expect_complete_task()
        .withf(|task_id| task_id == "42")
        .times(2)
        .returning(|_| Ok(()));
    let tools = TaskTools::new(Arc::new(api));

    let first = tools
        .complete_task(Parameters(TaskIdParams {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap();
    let second = tools
        .complete_task(Parameters(TaskIdParams {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(content_text(&first), "Task 42 completed successfully");
    assert_eq!(content_text(&first), content_text(&second));
}

#[tokio::test]
async fn test_reopen_task() {
    let mut api = MockTodoistApi::new();
    api.expect_reopen_task()
        .withf(|task_id| task_id == "42")
        .times(1)
        .returning(|_| Ok(()));
    let tools = TaskTools::new(Arc::new(api));

    let result = tools
        .reopen_task(Parameters(TaskIdParams {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(content_text(&result), "Task 42 reopened successfully");
}

#[tokio::test]
async fn test_delete_task_forbidden_is_internal_error() {
    let mut api = MockTodoistApi::new();
    api.expect_delete_task().times(1).returning(|_| {
        Err(ApiError::Remote {
            status: 403,
            message: "Forbidden".to_string(),
        })
    });
    let tools = TaskTools::new(Arc::new(api));

    let err = tools
        .delete_task(Parameters(TaskIdParams {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    let data = err.data.unwrap();
    assert_eq!(data["kind"], "remote_service");
    assert_eq!(data["status"], 403);
}

#[tokio::test]
async fn test_delete_task() {
    let mut api = MockTodoistApi::new();
    api.expect_delete_task()
        .withf(|task_id| task_id == "42")
        .times(1)
        .returning(|_| Ok(()));
    let tools = TaskTools::new(Arc::new(api));

    let result = tools
        .delete_task(Parameters(TaskIdParams {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(content_text(&result), "Task 42 deleted successfully");
}
