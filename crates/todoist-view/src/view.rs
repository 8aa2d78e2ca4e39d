//! Contracts between the pipeline and the presentation layer.
//!
//! The host renders forests and surfaces user actions as discrete events;
//! this module defines the two contracts it consumes: the completion-toggle
//! callback and the registry of views subscribed to refresh ticks.

use std::collections::BTreeMap;

use crate::query::Query;
use crate::tree::TaskNode;

/// Receives completion-toggle events from a rendered view.
///
/// The presentation layer invokes this with a task id and the new
/// completion state. It does not decide completion semantics itself — the
/// handler owns the mutation (typically a close/reopen call on the sync
/// client).
pub trait ToggleHandler {
    /// Called when the user toggles a task's checkbox.
    fn on_toggle(&self, task_id: &str, completed: bool);
}

impl<F: Fn(&str, bool)> ToggleHandler for F {
    fn on_toggle(&self, task_id: &str, completed: bool) {
        self(task_id, completed)
    }
}

/// Handle identifying one subscribed view.
pub type ViewId = u64;

/// A subscribed view: its query and the latest forest snapshot.
#[derive(Debug, Clone, Default)]
pub struct ViewSubscription {
    /// The view's parsed selection directive.
    pub query: Query,

    /// The forest from the most recent refresh; empty until the first tick.
    pub forest: Vec<TaskNode>,
}

/// Registry of views subscribed to refresh ticks.
///
/// Owned explicitly by whatever drives the scheduler — there is no global
/// instance. Each tick the owner walks [`subscriptions`](Self::subscriptions),
/// runs the pipeline per query, and stores the rebuilt forest with
/// [`update`](Self::update). Iteration order is stable (ascending handle).
#[derive(Debug, Default)]
pub struct ViewRegistry {
    next_id: ViewId,
    views: BTreeMap<ViewId, ViewSubscription>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> ViewRegistry {
        ViewRegistry::default()
    }

    /// Subscribes a view for the given query, returning its handle.
    pub fn add(&mut self, query: Query) -> ViewId {
        let id = self.next_id;
        self.next_id += 1;
        self.views.insert(
            id,
            ViewSubscription {
                query,
                forest: Vec::new(),
            },
        );
        id
    }

    /// Removes a view. Returns true if it was subscribed.
    pub fn remove(&mut self, id: ViewId) -> bool {
        self.views.remove(&id).is_some()
    }

    /// The queries to refresh this tick.
    pub fn subscriptions(&self) -> impl Iterator<Item = (ViewId, &Query)> {
        self.views.iter().map(|(id, sub)| (*id, &sub.query))
    }

    /// Stores the rebuilt forest for a view. Returns false when the view
    /// was unsubscribed while its refresh was in flight.
    pub fn update(&mut self, id: ViewId, forest: Vec<TaskNode>) -> bool {
        match self.views.get_mut(&id) {
            Some(sub) => {
                sub.forest = forest;
                true
            }
            None => false,
        }
    }

    /// The latest forest snapshot for a view.
    pub fn forest(&self, id: ViewId) -> Option<&[TaskNode]> {
        self.views.get(&id).map(|sub| sub.forest.as_slice())
    }

    /// Number of subscribed views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns true if no views are subscribed.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
