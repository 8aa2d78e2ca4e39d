//! Core pipeline for rendering Todoist tasks inside note views.
//!
//! This crate transforms a flat collection of remotely-fetched task records
//! into a hierarchical, orderable, filterable structure, and parses the
//! small directive language used to select which tasks to display:
//!
//! ```text
//! directive text -> Query -> (fetch) -> Task mapping -> filtering -> forest
//! ```
//!
//! Everything here is synchronous and pure: no I/O, no shared state, fresh
//! output structures on every call. The asynchronous boundary (fetching and
//! mutating remote data) lives in `todoist-sync-rs`; rendering and user
//! interaction belong to the host. By design this crate has no error type —
//! every degenerate input maps to a defined fallback (empty query, no-op
//! filter, dangling children promoted to roots) rather than a failure.

pub mod filter;
pub mod query;
pub mod task;
pub mod tree;
pub mod view;

pub use filter::{apply_filter, apply_filter_on};
pub use query::Query;
pub use task::{Due, Task};
pub use tree::{build_forest, TaskNode};
pub use view::{ToggleHandler, ViewId, ViewRegistry, ViewSubscription};
