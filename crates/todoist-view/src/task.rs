//! Canonical task model and the raw-record mapper.
//!
//! Remote records arrive wire-shaped, with legacy field aliases and
//! optional everything. [`Task::from_raw`] is the single total mapping into
//! the canonical shape the rest of the pipeline works with; every fallback
//! chain is spelled out here rather than inferred from the record's runtime
//! shape.

use serde::{Deserialize, Serialize};
use todoist_sync_rs::records::{RawDue, RawTask};

/// Base address for synthesized task links.
const TASK_URL_BASE: &str = "https://todoist.com/app/task/";

/// The canonical unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, stable across fetches.
    pub id: String,

    /// Display text.
    pub content: String,

    /// Whether the task is completed.
    pub is_completed: bool,

    /// Sibling ordering key; not globally unique, ties keep fetch order.
    pub order: i32,

    /// Priority from 1 (normal, no indicator) to 4 (urgent).
    pub priority: i32,

    /// The project the task belongs to.
    pub project_id: String,

    /// The section the task belongs to (if any).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// The owning task. May reference a task outside the current
    /// collection, e.g. one filtered out or in another project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Due date information, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,

    /// The user the task is assigned to (if any).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,

    /// Link to the task in the Todoist web app.
    pub url: String,
}

/// Due date information on a canonical task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    /// The date in YYYY-MM-DD format; empty when the record carried none.
    pub date: String,

    /// The full datetime, when a time is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    /// Human-readable display text (e.g., "every other friday").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}

impl Task {
    /// Maps a raw remote record into a canonical task.
    ///
    /// Completion is the OR of the two generations of completion flags.
    /// `order` falls back from the current to the legacy field, then 0;
    /// priority defaults to 1; the assignee falls back from `assignee_id`
    /// to `responsible_uid`. Section and parent stay absent (not empty)
    /// when missing — root detection in the tree builder depends on it.
    pub fn from_raw(raw: RawTask) -> Task {
        let url = format!("{TASK_URL_BASE}{}", raw.id);
        Task {
            is_completed: raw.completed.unwrap_or(false) || raw.checked.unwrap_or(false),
            order: raw.order.or(raw.item_order).unwrap_or(0),
            priority: raw.priority.unwrap_or(1),
            due: raw.due.map(Due::from_raw),
            assignee_id: raw.assignee_id.or(raw.responsible_uid),
            section_id: raw.section_id,
            parent_id: raw.parent_id,
            project_id: raw.project_id,
            content: raw.content,
            id: raw.id,
            url,
        }
    }
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Task {
        Task::from_raw(raw)
    }
}

impl Due {
    fn from_raw(raw: RawDue) -> Due {
        Due {
            date: raw.date.unwrap_or_default(),
            datetime: raw.datetime,
            string: raw.string,
        }
    }
}

/// Maps a raw collection elementwise.
pub fn map_tasks(raw: Vec<RawTask>) -> Vec<Task> {
    raw.into_iter().map(Task::from_raw).collect()
}
