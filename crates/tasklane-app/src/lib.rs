//! Application layer for tasklane.
//!
//! The [`Controller`] mediates between a [`TaskStore`] and a [`TaskView`]:
//! navigation and user events come in, store calls go out, and every store
//! completion is projected back to the view as [`Render`] instructions.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod file_store;
pub mod store;
pub mod view;

// Re-exports for convenience
pub use config::AppConfig;
pub use controller::Controller;
pub use error::{ControllerError, ControllerResult, StoreError};
pub use event::UiEvent;
pub use file_store::FileStore;
pub use store::{MemoryStore, TaskDocument, TaskStore};
pub use view::{Render, TaskView};
