//! Raw record types returned by the Todoist REST API.
//!
//! These structs follow the wire format, not the canonical shape the rest
//! of the pipeline works with. Several logical attributes arrive under more
//! than one field name depending on the endpoint generation; both halves of
//! each alias pair are kept as separate optionals so the mapper in
//! `todoist-view-rs` can apply its fallback chains explicitly instead of
//! hiding them behind serde attributes.

use serde::{Deserialize, Serialize};

/// A task record as returned by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    /// The unique identifier for the task.
    pub id: String,

    /// The text content of the task.
    pub content: String,

    /// A detailed description of the task (supports Markdown).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The ID of the project the task belongs to.
    pub project_id: String,

    /// The ID of the section the task belongs to (if any).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// The ID of the parent task (if this is a subtask).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Whether the task is completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    /// Legacy completion flag used by the older endpoint generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,

    /// The order of the task among its siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// Legacy order field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_order: Option<i32>,

    /// Task priority from 1 (normal) to 4 (urgent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// The due date/time information for the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<RawDue>,

    /// Labels attached to the task.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    /// The ID of the user the task is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,

    /// Legacy assignee field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_uid: Option<String>,
}

/// Due date/time information on a raw task.
///
/// At least one of `date`, `datetime`, or `string` is present in practice,
/// but none is individually guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDue {
    /// The date in YYYY-MM-DD format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// The full datetime in RFC3339 format (if a time is set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    /// Human-readable representation of the due date (e.g., "every day").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,

    /// Whether this is a recurring due date.
    #[serde(default)]
    pub is_recurring: bool,
}

/// A project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    /// The ID of the project.
    pub id: String,

    /// The name of the project.
    pub name: String,

    /// The order of the project among its siblings.
    #[serde(default)]
    pub order: i32,

    /// Parent project ID (absent for top-level projects).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// The color of the project icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Whether the project is shared.
    #[serde(default)]
    pub is_shared: bool,

    /// Whether the project is a favorite.
    #[serde(default)]
    pub is_favorite: bool,

    /// Whether this is the inbox project.
    #[serde(default)]
    pub is_inbox_project: bool,
}

/// A section record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSection {
    /// The ID of the section.
    pub id: String,

    /// The name of the section.
    pub name: String,

    /// The project this section belongs to.
    pub project_id: String,

    /// Order within the project.
    #[serde(default)]
    pub order: i32,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTask {
    /// Task content/title.
    pub content: String,

    /// Target project (default: Inbox).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Target section within the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// Parent task ID (creates a subtask).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Priority from 1 (normal) to 4 (urgent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// Due date in natural language (e.g., "tomorrow at 9am").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
}

impl CreateTask {
    /// Creates a request with just the task content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_task_deserialize_minimal() {
        let json = r#"{
            "id": "123",
            "content": "Buy milk",
            "project_id": "456"
        }"#;

        let task: RawTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "123");
        assert_eq!(task.content, "Buy milk");
        assert_eq!(task.project_id, "456");
        assert_eq!(task.completed, None);
        assert_eq!(task.checked, None);
        assert_eq!(task.order, None);
        assert_eq!(task.priority, None);
        assert!(task.due.is_none());
    }

    #[test]
    fn test_raw_task_deserialize_legacy_fields() {
        let json = r#"{
            "id": "123",
            "content": "Buy milk",
            "project_id": "456",
            "checked": true,
            "item_order": 7,
            "responsible_uid": "user2"
        }"#;

        let task: RawTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.checked, Some(true));
        assert_eq!(task.completed, None);
        assert_eq!(task.item_order, Some(7));
        assert_eq!(task.order, None);
        assert_eq!(task.responsible_uid, Some("user2".to_string()));
    }

    #[test]
    fn test_raw_task_null_section_is_none() {
        let json = r#"{
            "id": "123",
            "content": "Buy milk",
            "project_id": "456",
            "section_id": null,
            "parent_id": null
        }"#;

        let task: RawTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.section_id, None);
        assert_eq!(task.parent_id, None);
    }

    #[test]
    fn test_raw_due_partial_fields() {
        let json = r#"{"datetime": "2026-01-25T15:00:00Z", "string": "Jan 25 at 3pm"}"#;
        let due: RawDue = serde_json::from_str(json).unwrap();
        assert_eq!(due.date, None);
        assert_eq!(due.datetime, Some("2026-01-25T15:00:00Z".to_string()));
        assert_eq!(due.string, Some("Jan 25 at 3pm".to_string()));
        assert!(!due.is_recurring);
    }

    #[test]
    fn test_raw_project_flags_default_false() {
        let json = r#"{"id": "p1", "name": "Inbox"}"#;
        let project: RawProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.order, 0);
        assert!(!project.is_shared);
        assert!(!project.is_favorite);
        assert!(!project.is_inbox_project);
        assert_eq!(project.parent_id, None);
    }

    #[test]
    fn test_create_task_serializes_only_set_fields() {
        let req = CreateTask::new("Write report");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"content\":\"Write report\""));
        assert!(!json.contains("project_id"));
        assert!(!json.contains("due_string"));
    }
}
