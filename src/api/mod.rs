//! API client for the TaskFlow task service.
//!
//! The rest of the crate talks to the service through the [`TaskService`]
//! trait. [`TaskFlow`] is the HTTP implementation built on `reqwest`; tests
//! plug in an in-memory one.
//!
//! ## Features
//!
//! - **Tasks**: list with filters, fetch one, create, partial update, delete
//! - **Analytics**: overview snapshot plus per-status and per-priority counts
//! - **Health**: root ping
//! - **Single attempt**: every call is one request with no retry or backoff
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::api::{TaskFlow, TaskService};
//! use taskflow::libs::{config::Config, task::TaskFilter};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let client = TaskFlow::new(&config)?;
//! let tasks = client.list_tasks(&TaskFilter::default()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{AnalyticsSnapshot, Breakdown, NewTask, Task, TaskFilter, TaskPatch};
use reqwest::StatusCode;
use thiserror::Error;

pub mod taskflow;

pub use taskflow::TaskFlow;

/// A failed request.
///
/// Callers treat every variant the same way ("the request failed"); the
/// variants only exist so the log line says what went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} {url} returned {status}")]
    Status { method: String, url: String, status: StatusCode },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Operations offered by the task service.
///
/// Each method is a single request/response pair. Implementations must not
/// retry; the store decides what a failure means.
#[allow(async_fn_in_trait)]
pub trait TaskService {
    /// `GET /api/tasks`, omitting query parameters the filter leaves unset.
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError>;

    /// `GET /api/tasks/{id}`.
    async fn get_task(&self, id: &str) -> Result<Task, ApiError>;

    /// `POST /api/tasks`. The service assigns `id`, `status` and timestamps.
    async fn create_task(&self, fields: &NewTask) -> Result<Task, ApiError>;

    /// `PUT /api/tasks/{id}` with only the keys present in `patch`.
    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError>;

    /// `DELETE /api/tasks/{id}`.
    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /api/analytics/overview`.
    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, ApiError>;

    /// `GET /api/analytics/tasks-by-status` and `/tasks-by-priority`.
    async fn get_breakdown(&self) -> Result<Breakdown, ApiError>;

    /// `GET /api/`. Returns the service greeting.
    async fn ping(&self) -> Result<String, ApiError>;
}
