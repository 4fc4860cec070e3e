//! HTTP implementation of [`TaskService`] for the TaskFlow REST API.
//!
//! Every endpoint is addressed relative to the configured base URL. Request
//! construction is split from execution (`*_request` methods return a
//! `RequestBuilder`) so the exact method, URL, query and body can be checked
//! without a network.

use super::{ApiError, TaskService};
use crate::libs::config::Config;
use crate::libs::task::{AnalyticsSnapshot, Breakdown, NewTask, Task, TaskFilter, TaskPatch, TaskPriority, TaskStatus};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

const ROOT_URL: &str = "api/";
const TASKS_URL: &str = "api/tasks";
const OVERVIEW_URL: &str = "api/analytics/overview";
const BY_STATUS_URL: &str = "api/analytics/tasks-by-status";
const BY_PRIORITY_URL: &str = "api/analytics/tasks-by-priority";

#[derive(Debug, Deserialize)]
struct RootResponse {
    message: Option<String>,
}

/// HTTP client for one TaskFlow service.
///
/// Holds a single `reqwest::Client` (connection pool included) and the base
/// URL every endpoint is resolved against. Cloning is cheap and clones share
/// the pool.
///
/// ## Usage
///
/// ```rust,no_run
/// use taskflow::api::{TaskFlow, TaskService};
/// use taskflow::libs::config::Config;
///
/// # async fn run() -> anyhow::Result<()> {
/// let client = TaskFlow::new(&Config::read()?)?;
/// println!("{}", client.ping().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TaskFlow {
    client: Client,
    base_url: String,
}

impl TaskFlow {
    /// Builds a client for `config.api_url`. A request timeout is applied only
    /// when one is configured.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, TASKS_URL, id)
    }

    /// `GET /api/tasks` for `filter`.
    ///
    /// Only the fields the filter sets become query parameters; with an empty
    /// filter the URL carries no query string at all.
    ///
    /// ```rust
    /// use taskflow::api::TaskFlow;
    /// use taskflow::libs::config::Config;
    /// use taskflow::libs::task::{TaskFilter, TaskStatus};
    ///
    /// let client = TaskFlow::new(&Config::resolve(|_| None, Some("http://localhost:8001"))?)?;
    /// let filter = TaskFilter { status: Some(TaskStatus::InProgress), ..TaskFilter::default() };
    /// let request = client.list_request(&filter).build()?;
    /// assert_eq!(request.url().query(), Some("status=in_progress"));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn list_request(&self, filter: &TaskFilter) -> RequestBuilder {
        let request = self.client.get(self.url(TASKS_URL));
        let pairs = filter.query_pairs();
        if pairs.is_empty() {
            request
        } else {
            request.query(&pairs)
        }
    }

    /// `GET /api/tasks/{id}`.
    pub fn get_request(&self, id: &str) -> RequestBuilder {
        self.client.get(self.task_url(id))
    }

    /// `POST /api/tasks` with `fields` as the JSON body.
    pub fn create_request(&self, fields: &NewTask) -> RequestBuilder {
        self.client.post(self.url(TASKS_URL)).json(fields)
    }

    /// `PUT /api/tasks/{id}`. Keys left `None` in `patch` are not in the body.
    pub fn update_request(&self, id: &str, patch: &TaskPatch) -> RequestBuilder {
        self.client.put(self.task_url(id)).json(patch)
    }

    /// `DELETE /api/tasks/{id}`, no body.
    pub fn delete_request(&self, id: &str) -> RequestBuilder {
        self.client.delete(self.task_url(id))
    }

    /// `GET /api/analytics/overview`.
    pub fn analytics_request(&self) -> RequestBuilder {
        self.client.get(self.url(OVERVIEW_URL))
    }

    /// Sends a request once and turns non-2xx statuses into [`ApiError::Status`].
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request.build()?;
        let method = request.method().to_string();
        let url = request.url().to_string();
        debug!(%method, %url, "sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!(%method, %url, %status, "received response");

        if !status.is_success() {
            return Err(ApiError::Status { method, url, status });
        }
        Ok(response)
    }

    async fn counts(&self, path: &str) -> Result<BTreeMap<String, u64>, ApiError> {
        let response = self.execute(self.client.get(self.url(path))).await?;
        Ok(response.json::<BTreeMap<String, u64>>().await?)
    }
}

impl TaskService for TaskFlow {
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
        let response = self.execute(self.list_request(filter)).await?;
        Ok(response.json::<Vec<Task>>().await?)
    }

    async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        let response = self.execute(self.get_request(id)).await?;
        Ok(response.json::<Task>().await?)
    }

    async fn create_task(&self, fields: &NewTask) -> Result<Task, ApiError> {
        let response = self.execute(self.create_request(fields)).await?;
        Ok(response.json::<Task>().await?)
    }

    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let response = self.execute(self.update_request(id, patch)).await?;
        Ok(response.json::<Task>().await?)
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        // The body is a confirmation message nobody reads.
        self.execute(self.delete_request(id)).await?;
        Ok(())
    }

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        let response = self.execute(self.analytics_request()).await?;
        Ok(response.json::<AnalyticsSnapshot>().await?)
    }

    async fn get_breakdown(&self) -> Result<Breakdown, ApiError> {
        let (by_status, by_priority) = tokio::try_join!(self.counts(BY_STATUS_URL), self.counts(BY_PRIORITY_URL))?;
        Ok(breakdown_from_counts(by_status, by_priority))
    }

    async fn ping(&self) -> Result<String, ApiError> {
        let response = self.execute(self.client.get(self.url(ROOT_URL))).await?;
        response
            .json::<RootResponse>()
            .await?
            .message
            .ok_or_else(|| ApiError::Decode("root response has no message".to_string()))
    }
}

/// Maps the service's `{"todo": 3, ...}` objects onto typed keys. Keys that
/// are not a known status or priority are dropped.
pub fn breakdown_from_counts(by_status: BTreeMap<String, u64>, by_priority: BTreeMap<String, u64>) -> Breakdown {
    let mut breakdown = Breakdown::default();
    for (key, count) in by_status {
        match TaskStatus::ALL.iter().find(|s| s.as_str() == key) {
            Some(status) => {
                breakdown.by_status.insert(*status, count);
            }
            None => warn!(%key, "ignoring unknown status in breakdown"),
        }
    }
    for (key, count) in by_priority {
        match TaskPriority::ALL.iter().find(|p| p.as_str() == key) {
            Some(priority) => {
                breakdown.by_priority.insert(*priority, count);
            }
            None => warn!(%key, "ignoring unknown priority in breakdown"),
        }
    }
    breakdown
}
