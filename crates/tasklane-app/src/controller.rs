//! Controller mediating between the task store and the view.

use futures::stream::{FuturesUnordered, StreamExt};
use tasklane_core::{Filter, Task, TaskChanges, TaskCounts, TaskId, TaskQuery};
use tracing::debug;

use crate::error::{ControllerError, ControllerResult};
use crate::event::UiEvent;
use crate::store::TaskStore;
use crate::view::{Render, TaskView};

/// Translates navigation and user events into store calls and render instructions.
///
/// The controller never mirrors task data: every projection is derived from a
/// fresh store read. The only thing it remembers is the filter resolved by the
/// last [`set_view`](Self::set_view), so refreshes after a mutation re-query
/// the list the user is looking at.
pub struct Controller<S, V> {
    store: S,
    view: V,
    filter: Filter,
}

impl<S, V> Controller<S, V> {
    /// Wire a controller to its collaborators.
    pub const fn new(store: S, view: V) -> Self {
        Self {
            store,
            view,
            filter: Filter::All,
        }
    }

    /// Filter resolved by the most recent navigation.
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Borrow the store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Borrow the view.
    pub const fn view(&self) -> &V {
        &self.view
    }
}

impl<S: TaskStore, V: TaskView> Controller<S, V> {
    /// Resolve `route` and render the full view for it.
    ///
    /// Renders `showEntries`, the count projection and finally `setFilter`.
    ///
    /// # Errors
    /// Returns an error when a store call fails.
    pub async fn set_view(&mut self, route: &str) -> ControllerResult<()> {
        let filter = Filter::from_route(route);
        debug!(route, filter = filter.token(), "resolved route");
        self.filter = filter;

        self.show_entries().await?;
        self.render_counts().await?;
        self.view.render(Render::SetFilter(filter.token()));
        Ok(())
    }

    /// Handle one user event.
    ///
    /// # Errors
    /// Returns an error when a store call fails; renders already issued stay issued.
    pub async fn dispatch(&self, event: UiEvent) -> ControllerResult<()> {
        debug!(event = event.name(), "dispatching");
        match event {
            UiEvent::NewTodo(title) => self.add_item(&title).await,
            UiEvent::ItemRemove { id } => self.remove_item(id).await,
            UiEvent::ItemToggle { id, completed } => self.toggle_item(id, completed).await,
            UiEvent::ToggleAll { completed } => self.toggle_all(completed).await,
            UiEvent::ItemEdit { id } => self.edit_item(id).await,
            UiEvent::ItemEditDone { id, title } => self.edit_item_save(id, &title).await,
            UiEvent::ItemEditCancel { id } => self.edit_item_cancel(id).await,
            UiEvent::RemoveCompleted => self.remove_completed().await,
        }
    }

    async fn add_item(&self, title: &str) -> ControllerResult<()> {
        self.store.create(title).await.map_err(Self::store_error)?;
        self.show_entries().await?;
        self.view.render(Render::ClearNewTodo);
        self.render_counts().await
    }

    async fn remove_item(&self, id: TaskId) -> ControllerResult<()> {
        self.store.remove(id).await.map_err(Self::store_error)?;
        self.view.render(Render::RemoveItem(id));
        self.render_counts().await
    }

    async fn toggle_item(&self, id: TaskId, completed: bool) -> ControllerResult<()> {
        self.set_completed(id, completed).await?;
        self.refresh().await
    }

    async fn toggle_all(&self, completed: bool) -> ControllerResult<()> {
        let tasks = self.read(TaskQuery::completed(!completed)).await?;
        debug!(count = tasks.len(), completed, "toggling all tasks");

        settle(
            tasks
                .iter()
                .map(|task| self.set_completed(task.id, completed))
                .collect(),
        )
        .await?;
        self.refresh().await
    }

    async fn edit_item(&self, id: TaskId) -> ControllerResult<()> {
        match self.find(id).await? {
            Some(task) => self.view.render(Render::EditItem {
                id,
                title: task.title,
            }),
            None => debug!(%id, "edit target no longer exists"),
        }
        Ok(())
    }

    async fn edit_item_save(&self, id: TaskId, title: &str) -> ControllerResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return self.remove_item(id).await;
        }

        self.store
            .update(id, TaskChanges::title(title))
            .await
            .map_err(Self::store_error)?;
        self.view.render(Render::EditItemDone {
            id,
            title: title.to_owned(),
        });
        Ok(())
    }

    async fn edit_item_cancel(&self, id: TaskId) -> ControllerResult<()> {
        match self.find(id).await? {
            Some(task) => self.view.render(Render::EditItemDone {
                id,
                title: task.title,
            }),
            None => debug!(%id, "cancelled edit target no longer exists"),
        }
        Ok(())
    }

    async fn remove_completed(&self) -> ControllerResult<()> {
        let tasks = self.read(TaskQuery::completed(true)).await?;
        debug!(count = tasks.len(), "removing completed tasks");

        settle(tasks.iter().map(|task| self.remove_row(task.id)).collect()).await?;
        self.refresh().await
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> ControllerResult<()> {
        self.store
            .update(id, TaskChanges::completed(completed))
            .await
            .map_err(Self::store_error)?;
        self.view.render(Render::ElementComplete { id, completed });
        Ok(())
    }

    async fn remove_row(&self, id: TaskId) -> ControllerResult<()> {
        self.store.remove(id).await.map_err(Self::store_error)?;
        self.view.render(Render::RemoveItem(id));
        Ok(())
    }

    /// Re-project after a mutation that may move rows in or out of the filtered list.
    async fn refresh(&self) -> ControllerResult<()> {
        if self.filter != Filter::All {
            self.show_entries().await?;
        }
        self.render_counts().await
    }

    async fn show_entries(&self) -> ControllerResult<()> {
        let tasks = self.read(self.filter.query()).await?;
        self.view.render(Render::ShowEntries(tasks));
        Ok(())
    }

    async fn render_counts(&self) -> ControllerResult<()> {
        let counts: TaskCounts = self.store.get_count().await.map_err(Self::store_error)?;
        self.view.render(Render::UpdateElementCount(counts.active));
        self.view.render(Render::ClearCompletedButton {
            completed: counts.completed,
            visible: counts.clear_completed_visible(),
        });
        self.view.render(Render::ToggleAll {
            checked: counts.all_checked(),
        });
        self.view.render(Render::ContentBlockVisibility {
            visible: counts.content_visible(),
        });
        Ok(())
    }

    async fn read(&self, query: TaskQuery) -> ControllerResult<Vec<Task>> {
        self.store.read(query).await.map_err(Self::store_error)
    }

    async fn find(&self, id: TaskId) -> ControllerResult<Option<Task>> {
        Ok(self.read(TaskQuery::by_id(id)).await?.into_iter().next())
    }

    fn store_error(err: S::Error) -> ControllerError {
        ControllerError::Store(err.into())
    }
}

/// Drive a fan-out batch to completion in whatever order the calls finish.
///
/// Every call runs its own render step; the first failure is reported once the
/// whole batch has settled.
async fn settle<F>(mut pending: FuturesUnordered<F>) -> ControllerResult<()>
where
    F: Future<Output = ControllerResult<()>>,
{
    let mut first_error = None;
    while let Some(result) = pending.next().await {
        if let Err(err) = result {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}
