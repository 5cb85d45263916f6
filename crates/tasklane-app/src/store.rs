//! Task Store contract and the in-memory implementation.

use anyhow::Error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tasklane_core::{Task, TaskChanges, TaskCounts, TaskId, TaskQuery};
use tokio::sync::Mutex;

use crate::error::StoreError;

/// Asynchronous CRUD contract the controller talks to.
///
/// The store owns the authoritative task collection and assigns ids. Each call
/// resolves once its effect is durable.
#[allow(async_fn_in_trait)]
pub trait TaskStore: Send + Sync {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error> + Send;

    /// Read every task matching `query`, in store order.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be read.
    async fn read(&self, query: TaskQuery) -> Result<Vec<Task>, Self::Error>;

    /// Count tasks over the whole collection.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be read.
    async fn get_count(&self) -> Result<TaskCounts, Self::Error>;

    /// Create an open task with `title` and return it with its new id.
    ///
    /// # Errors
    /// Returns a store-specific error when persisting fails.
    async fn create(&self, title: &str) -> Result<Task, Self::Error>;

    /// Apply `changes` to the task with `id` and return the updated record.
    ///
    /// # Errors
    /// Returns a store-specific error when the task is unknown or persisting fails.
    async fn update(&self, id: TaskId, changes: TaskChanges) -> Result<Task, Self::Error>;

    /// Remove the task with `id`.
    ///
    /// # Errors
    /// Returns a store-specific error when the task is unknown or persisting fails.
    async fn remove(&self, id: TaskId) -> Result<(), Self::Error>;
}

/// Ordered task collection shared by the bundled stores; also the on-disk format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDocument {
    /// Tasks in creation order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskDocument {
    /// Clone out the tasks matching `query`.
    #[must_use]
    pub fn read(&self, query: TaskQuery) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| query.matches(task))
            .cloned()
            .collect()
    }

    /// Count the whole collection.
    #[must_use]
    pub fn count(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    /// Append a fresh open task.
    pub fn create(&mut self, title: &str) -> Task {
        let task = Task::new(TaskId::new(), title);
        self.tasks.push(task.clone());
        task
    }

    /// Patch an existing task.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] when no task has `id`.
    pub fn update(&mut self, id: TaskId, changes: &TaskChanges) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.apply(changes);
        Ok(task.clone())
    }

    /// Drop an existing task.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] when no task has `id`.
    pub fn remove(&mut self, id: TaskId) -> Result<(), StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }
}

/// Process-local store. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<Mutex<TaskDocument>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            document: Arc::new(Mutex::new(TaskDocument { tasks })),
        }
    }
}

impl TaskStore for MemoryStore {
    type Error = StoreError;

    async fn read(&self, query: TaskQuery) -> Result<Vec<Task>, Self::Error> {
        Ok(self.document.lock().await.read(query))
    }

    async fn get_count(&self) -> Result<TaskCounts, Self::Error> {
        Ok(self.document.lock().await.count())
    }

    async fn create(&self, title: &str) -> Result<Task, Self::Error> {
        Ok(self.document.lock().await.create(title))
    }

    async fn update(&self, id: TaskId, changes: TaskChanges) -> Result<Task, Self::Error> {
        self.document.lock().await.update(id, &changes)
    }

    async fn remove(&self, id: TaskId) -> Result<(), Self::Error> {
        self.document.lock().await.remove(id)
    }
}
