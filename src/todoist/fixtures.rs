//! Sample records shared by tests.

use super::{Project, Section, Task};

pub(crate) fn sample_task(id: &str, content: &str) -> Task {
    Task {
        id: id.to_string(),
        content: content.to_string(),
        description: String::new(),
        project_id: "2203306141".to_string(),
        section_id: None,
        parent_id: None,
        labels: vec![],
        priority: 1,
        due: None,
        is_completed: false,
        order: 1,
        comment_count: 0,
        url: format!("https://todoist.com/showTask?id={}", id),
        created_at: "2025-01-01T10:00:00.000000Z".to_string(),
    }
}

pub(crate) fn sample_project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        color: "grey".to_string(),
        parent_id: None,
        order: 1,
        comment_count: 0,
        is_shared: false,
        is_favorite: false,
        is_inbox_project: false,
        is_team_inbox: false,
        view_style: "list".to_string(),
        url: format!("https://todoist.com/showProject?id={}", id),
    }
}

pub(crate) fn sample_section(id: &str, project_id: &str, name: &str) -> Section {
    Section {
        id: id.to_string(),
        project_id: project_id.to_string(),
        order: 1,
        name: name.to_string(),
    }
}
