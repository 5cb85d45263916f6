//! Domain types for tasklane: task records, queries, counts and route filters.

/// Route fragment resolution.
pub mod filter;
/// Identifier types.
pub mod id;
/// Read queries and aggregate counts.
pub mod query;
/// Task records and partial updates.
pub mod task;

pub use filter::Filter;
pub use id::TaskId;
pub use query::{TaskCounts, TaskQuery};
pub use task::{Task, TaskChanges};
