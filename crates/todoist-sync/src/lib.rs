//! Todoist REST client for the note-view pipeline.
//!
//! This crate owns the asynchronous boundary of the system: fetching raw
//! task/project/section records from the Todoist REST API and forwarding
//! mutations (create, complete, reopen). The records it returns are
//! deliberately loose — wire-shaped, with every legacy field alias kept —
//! so that the mapping into canonical tasks stays in `todoist-view-rs`
//! where it can be tested without a network.
//!
//! # Quick Start
//!
//! ```no_run
//! use todoist_sync_rs::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = TodoistClient::new("api-token");
//! let tasks = client.get_tasks(&TaskSelection::Filter("today".into())).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod prelude;
pub mod records;

pub use client::{TaskSelection, TodoistClient};
pub use error::{ApiError, Error, Result};
