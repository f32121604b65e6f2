//! Common test utilities for integration tests
#![allow(dead_code)]

use serde_json::{Value, json};
use todoist_export::{ApiToken, SectionRef, Task, TodoistClient};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

/// Create a client pointed at the mock server
pub fn get_test_client(server: &MockServer) -> TodoistClient {
    TodoistClient::with_endpoints(
        ApiToken::new(TEST_TOKEN).unwrap(),
        format!("{}/rest/v2", server.uri()),
        format!("{}/sync/v9", server.uri()),
    )
    .unwrap()
}

/// Create an open, unsectioned task with minimal fields
pub fn create_test_task(id: &str, content: &str) -> Task {
    Task {
        id: id.to_string(),
        content: content.to_string(),
        project_id: "p1".to_string(),
        section: None,
        parent_id: None,
        labels: Vec::new(),
        is_completed: false,
        due: None,
        completed_at: None,
        priority: None,
        created_at: None,
        url: None,
    }
}

/// Create a task in a named section
pub fn create_sectioned_task(id: &str, content: &str, section_id: &str, section_name: &str) -> Task {
    Task {
        section: Some(SectionRef::Named {
            id: section_id.to_string(),
            name: section_name.to_string(),
        }),
        ..create_test_task(id, content)
    }
}

/// Project record as sent by `/projects`
pub fn project_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": "charcoal",
        "url": format!("https://todoist.com/showProject?id={}", id),
        "description": "",
        "is_favorite": false
    })
}
