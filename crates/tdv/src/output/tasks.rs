//! Task forest rendering.

use owo_colors::OwoColorize;
use todoist_view_rs::TaskNode;

use super::{format_due, format_priority, truncate_id};

/// Formats a forest as an indented markdown-style checkbox tree.
pub fn format_forest_tree(forest: &[TaskNode], use_colors: bool) -> String {
    let mut out = String::new();
    for node in forest {
        write_node(&mut out, node, 0, use_colors);
    }
    if forest.is_empty() {
        out.push_str("No tasks found.\n");
    }
    out
}

fn write_node(out: &mut String, node: &TaskNode, depth: usize, use_colors: bool) {
    let task = &node.task;
    let indent = "  ".repeat(depth);
    let checkbox = if task.is_completed { "[x]" } else { "[ ]" };

    out.push_str(&indent);
    out.push_str("- ");
    out.push_str(checkbox);
    out.push(' ');
    out.push_str(&task.content);

    let priority = format_priority(task.priority, use_colors);
    if !priority.is_empty() {
        out.push_str("  ");
        out.push_str(&priority);
    }

    if let Some(due) = &task.due {
        let display = match &due.string {
            Some(text) => text.clone(),
            None if !due.date.is_empty() => format_due(&due.date, use_colors),
            None => String::new(),
        };
        if !display.is_empty() {
            out.push_str("  ");
            out.push_str(&display);
        }
    }

    let id = truncate_id(&task.id);
    if use_colors {
        out.push_str(&format!("  ({})", id.dimmed()));
    } else {
        out.push_str(&format!("  ({id})"));
    }
    out.push('\n');

    for child in &node.children {
        write_node(out, child, depth + 1, use_colors);
    }
}

/// Formats a forest as pretty JSON.
pub fn format_forest_json(forest: &[TaskNode]) -> serde_json::Result<String> {
    let count: usize = forest.iter().map(TaskNode::count).sum();
    let output = serde_json::json!({
        "count": count,
        "tasks": forest,
    });
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoist_view_rs::{build_forest, Task};

    fn task(id: &str, content: &str, order: i32, parent_id: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            content: content.to_string(),
            is_completed: false,
            order,
            priority: 1,
            project_id: "p1".to_string(),
            section_id: None,
            parent_id: parent_id.map(String::from),
            due: None,
            assignee_id: None,
            url: format!("https://todoist.com/app/task/{id}"),
        }
    }

    #[test]
    fn test_empty_forest_message() {
        let output = format_forest_tree(&[], false);
        assert_eq!(output, "No tasks found.\n");
    }

    #[test]
    fn test_tree_indentation_and_checkboxes() {
        let mut parent = task("1", "Parent", 0, None);
        parent.is_completed = true;
        let child = task("2", "Child", 0, Some("1"));

        let forest = build_forest(&[parent, child]);
        let output = format_forest_tree(&forest, false);

        assert_eq!(output, "- [x] Parent  (1)\n  - [ ] Child  (2)\n");
    }

    #[test]
    fn test_priority_and_due_in_line() {
        let mut t = task("1", "Urgent", 0, None);
        t.priority = 4;
        t.due = Some(todoist_view_rs::Due {
            date: "2026-01-25".to_string(),
            datetime: None,
            string: Some("Jan 25".to_string()),
        });

        let forest = build_forest(&[t]);
        let output = format_forest_tree(&forest, false);
        assert_eq!(output, "- [ ] Urgent  p4  Jan 25  (1)\n");
    }

    #[test]
    fn test_json_output_counts_nested_nodes() {
        let forest = build_forest(&[
            task("1", "Parent", 0, None),
            task("2", "Child", 0, Some("1")),
        ]);

        let json = format_forest_json(&forest).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["tasks"][0]["task"]["content"], "Parent");
        assert_eq!(value["tasks"][0]["children"][0]["task"]["content"], "Child");
    }
}
