//! Task store: the single source of truth for what the client shows.
//!
//! The store owns the task list, the analytics snapshot, the active filter and
//! the loading flag. Its public methods are the only way to change them.
//!
//! ## Synchronization model
//!
//! ```text
//! mutation ──ok──▶ refresh() ──▶ list_tasks(filter) ┐
//!    │                       └──▶ get_analytics()   ┴─▶ both ok? replace both
//!    └──err──▶ log, state untouched
//! ```
//!
//! - Mutations never touch local state directly. A successful call is followed
//!   by a full refresh, so the UI shows stale data until that completes.
//! - `refresh` waits for both fetches and applies them together. If either one
//!   fails, neither list is replaced.
//! - Refreshes are sequenced: `refresh` takes `&mut self`, so a second one
//!   cannot start before the first has been applied. The filter is captured
//!   when a refresh starts and stored with its result in `fetched_with`.
//! - Failures are logged and swallowed here. Callers only learn whether the
//!   operation took effect.

use crate::api::{ApiError, TaskService};
use crate::libs::messages::Message;
use crate::libs::task::{AnalyticsSnapshot, Breakdown, NewTask, Task, TaskFilter, TaskPatch, TaskStatus};
use crate::{msg_debug, msg_error};

#[derive(Debug)]
pub struct TaskStore<S: TaskService> {
    service: S,
    tasks: Vec<Task>,
    analytics: AnalyticsSnapshot,
    filter: TaskFilter,
    fetched_with: Option<TaskFilter>,
    loading: bool,
    refreshes: u64,
}

impl<S: TaskService> TaskStore<S> {
    /// Creates an empty store. Nothing is fetched until [`TaskStore::refresh`].
    pub fn new(service: S) -> Self {
        Self {
            service,
            tasks: Vec::new(),
            analytics: AnalyticsSnapshot::default(),
            filter: TaskFilter::default(),
            fetched_with: None,
            loading: false,
            refreshes: 0,
        }
    }

    /// Tasks from the last applied refresh, in service order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn analytics(&self) -> &AnalyticsSnapshot {
        &self.analytics
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Filter the current task list was fetched with, `None` before the first
    /// successful refresh.
    pub fn fetched_with(&self) -> Option<&TaskFilter> {
        self.fetched_with.as_ref()
    }

    /// True only while [`TaskStore::refresh`] is waiting on the service.
    ///
    /// `refresh` holds `&mut self` for its whole run, so nothing else can read
    /// the store in the meantime and this returns `false` between calls. A
    /// loading screen is shown by rendering a [`ViewState`](crate::libs::view::ViewState)
    /// with `loading` set before the refresh is awaited.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of refreshes that replaced the lists.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    /// Looks up a task in the current list without asking the service.
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Fetches the task list and analytics together and replaces both, or
    /// neither. Returns whether the lists were replaced.
    pub async fn refresh(&mut self) -> bool {
        self.loading = true;
        let filter = self.filter.clone();
        msg_debug!("refreshing with {:?}", filter);

        let (tasks, analytics) = tokio::join!(self.service.list_tasks(&filter), self.service.get_analytics());

        let applied = match (tasks, analytics) {
            (Ok(tasks), Ok(analytics)) => {
                self.tasks = tasks;
                self.analytics = analytics;
                self.fetched_with = Some(filter);
                self.refreshes += 1;
                true
            }
            (Err(e), _) | (_, Err(e)) => {
                msg_error!(Message::RefreshFailed(e.to_string()));
                false
            }
        };

        self.loading = false;
        applied
    }

    /// Replaces the filter and refetches both lists.
    pub async fn set_filter(&mut self, filter: TaskFilter) -> bool {
        self.filter = filter;
        self.refresh().await
    }

    /// Creates a task and refreshes on success.
    pub async fn create(&mut self, fields: NewTask) -> bool {
        let result = self.service.create_task(&fields).await.map(|_| ());
        self.after_mutation("create", result).await
    }

    /// Applies a partial update and refreshes on success.
    pub async fn update(&mut self, id: &str, patch: TaskPatch) -> bool {
        let result = self.service.update_task(id, &patch).await.map(|_| ());
        self.after_mutation("update", result).await
    }

    /// Deletes a task and refreshes on success. Confirmation is the caller's job.
    pub async fn delete(&mut self, id: &str) -> bool {
        let result = self.service.delete_task(id).await;
        self.after_mutation("delete", result).await
    }

    /// Quick status change: a patch carrying only `status`.
    pub async fn set_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let result = self.service.update_task(id, &TaskPatch::status(status)).await.map(|_| ());
        self.after_mutation("set_status", result).await
    }

    /// Fetches a single task straight from the service. Read-only.
    pub async fn task(&self, id: &str) -> Option<Task> {
        match self.service.get_task(id).await {
            Ok(task) => Some(task),
            Err(e) => {
                msg_error!(Message::RequestFailed("get".to_string(), e.to_string()));
                None
            }
        }
    }

    /// Loads per-status and per-priority counts. Does not touch store state.
    pub async fn breakdown(&self) -> Option<Breakdown> {
        match self.service.get_breakdown().await {
            Ok(breakdown) => Some(breakdown),
            Err(e) => {
                msg_error!(Message::BreakdownFailed(e.to_string()));
                None
            }
        }
    }

    async fn after_mutation(&mut self, operation: &str, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                msg_error!(Message::RequestFailed(operation.to_string(), e.to_string()));
                false
            }
        }
    }
}
