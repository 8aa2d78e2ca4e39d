//! Flat-to-forest conversion for parent-referencing task collections.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::task::Task;

/// One task plus its ordered children.
///
/// Nodes are built fresh per [`build_forest`] call and owned solely by
/// their parent node or the root forest; nothing is retained across
/// fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskNode {
    /// The task at this node.
    pub task: Task,

    /// Child nodes, sorted by `order`.
    pub children: Vec<TaskNode>,
}

impl TaskNode {
    /// Total number of nodes in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TaskNode::count).sum::<usize>()
    }
}

/// Converts a flat collection into an ordered forest.
///
/// A task becomes a root when it has no parent id, or when its parent id
/// does not resolve within the given collection. The latter is deliberate:
/// upstream filtering (by project, section or completion) can legitimately
/// sever a child from a parent that is not part of the current fetch, and
/// such children must still render as top-level items rather than being
/// silently dropped.
///
/// Roots and every child list are sorted by `order` ascending at every
/// depth; the sort is stable, so ties keep the input collection's relative
/// order. Input tasks are not mutated.
pub fn build_forest(tasks: &[Task]) -> Vec<TaskNode> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    let mut children_of: HashMap<&str, Vec<&Task>> = HashMap::new();
    let mut roots: Vec<&Task> = Vec::new();

    for task in tasks {
        match task.parent_id.as_deref().filter(|p| ids.contains(p)) {
            Some(parent_id) => children_of.entry(parent_id).or_default().push(task),
            None => roots.push(task),
        }
    }

    roots.sort_by_key(|t| t.order);
    roots
        .into_iter()
        .map(|task| build_node(task, &children_of))
        .collect()
}

fn build_node(task: &Task, children_of: &HashMap<&str, Vec<&Task>>) -> TaskNode {
    let mut children: Vec<&Task> = children_of
        .get(task.id.as_str())
        .cloned()
        .unwrap_or_default();
    children.sort_by_key(|t| t.order);

    TaskNode {
        task: task.clone(),
        children: children
            .into_iter()
            .map(|child| build_node(child, children_of))
            .collect(),
    }
}
