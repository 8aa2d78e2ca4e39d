//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types so consumers can pull in the
//! whole client surface with a single use statement.

pub use crate::client::{TaskSelection, TodoistClient};
pub use crate::error::{ApiError, Error, Result};
pub use crate::records::{CreateTask, RawDue, RawProject, RawSection, RawTask};
