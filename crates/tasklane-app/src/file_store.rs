//! JSON-file backed [`TaskStore`].

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tasklane_core::{Task, TaskChanges, TaskCounts, TaskId, TaskQuery};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;
use crate::store::{TaskDocument, TaskStore};

/// Store that keeps the task collection in a single JSON document.
///
/// Every call loads the file, applies its change and writes it back on a
/// blocking worker. Calls are serialized through an async mutex so concurrent
/// fan-out updates never interleave a load with another call's write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Open (or lazily create) the document at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn with_document<T, F>(&self, mutates: bool, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut TaskDocument) -> Result<T, StoreError> + Send + 'static,
    {
        let _guard = self.lock.lock().await;
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let mut document = load_document(&path)?;
            let value = op(&mut document)?;
            if mutates {
                save_document(&path, &document)?;
            }
            Ok(value)
        })
        .await?
    }
}

fn load_document(path: &Path) -> Result<TaskDocument, StoreError> {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(TaskDocument::default()),
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(TaskDocument::default()),
        Err(err) => Err(err.into()),
    }
}

fn save_document(path: &Path, document: &TaskDocument) -> Result<(), StoreError> {
    let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_vec_pretty(document)?;
    let tmp = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&json)?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), tasks = document.tasks.len(), "wrote task file");
    Ok(())
}

impl TaskStore for FileStore {
    type Error = StoreError;

    async fn read(&self, query: TaskQuery) -> Result<Vec<Task>, Self::Error> {
        self.with_document(false, move |doc| Ok(doc.read(query))).await
    }

    async fn get_count(&self) -> Result<TaskCounts, Self::Error> {
        self.with_document(false, |doc| Ok(doc.count())).await
    }

    async fn create(&self, title: &str) -> Result<Task, Self::Error> {
        let title = title.to_owned();
        self.with_document(true, move |doc| Ok(doc.create(&title))).await
    }

    async fn update(&self, id: TaskId, changes: TaskChanges) -> Result<Task, Self::Error> {
        self.with_document(true, move |doc| doc.update(id, &changes)).await
    }

    async fn remove(&self, id: TaskId) -> Result<(), Self::Error> {
        self.with_document(true, move |doc| doc.remove(id)).await
    }
}
