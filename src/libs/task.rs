//! Task domain types shared by the API client, the store, the form and the view.
//!
//! Everything in here mirrors what the TaskFlow service sends and accepts on the
//! wire. Two small pieces of logic live next to the types because every layer
//! needs them:
//!
//! - [`parse_tags`] turns the raw comma-separated tag input into a list
//! - [`Task::is_overdue_at`] is the derived "Overdue" predicate used on render
//!
//! ## Usage
//!
//! ```rust
//! use taskflow::libs::task::{parse_tags, TaskFilter, TaskStatus};
//!
//! assert_eq!(parse_tags("a, b ,, c"), vec!["a", "b", "c"]);
//!
//! let filter = TaskFilter { status: Some(TaskStatus::Todo), ..TaskFilter::default() };
//! assert_eq!(filter.query_pairs(), vec![("status", "todo".to_string())]);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire format of `due_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    /// Value used in query strings and JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High, TaskPriority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task as returned by the service.
///
/// `id` is assigned by the service and never changes. The client never edits
/// a `Task` in place: changes go out as [`NewTask`] or [`TaskPatch`] and the
/// list is fetched again.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Kept as sent (`YYYY-MM-DD`); parsed only when deciding overdue.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Task {
    /// Parsed `due_date`, or `None` when absent or not a valid date.
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(|d| NaiveDate::parse_from_str(d.trim(), DATE_FORMAT).ok())
    }

    /// A task is overdue when its due date starts strictly before `now`
    /// and it is not completed.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        if self.status == TaskStatus::Completed {
            return false;
        }
        match self.due().and_then(|d| d.and_hms_opt(0, 0, 0)) {
            Some(start) => start.and_utc() < now,
            None => false,
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }
}

/// Body of `POST /api/tasks`. The service assigns `id` and `status`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub tags: Vec<String>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// Body of `PUT /api/tasks/{id}`. Only `Some` fields are sent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    /// Patch that changes only the status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Criteria for `GET /api/tasks`. `None` means "any".
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<String>,
}

impl TaskFilter {
    /// Query parameters to send. Unset fields are left out entirely and an
    /// empty assignee counts as unset.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if let Some(assignee) = self.assigned_to.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
            pairs.push(("assigned_to", assignee.to_string()));
        }
        pairs
    }
}

/// Aggregate counts from `GET /api/analytics/overview`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct AnalyticsSnapshot {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub in_progress_tasks: u64,
    pub overdue_tasks: u64,
    #[serde(default)]
    pub todo_tasks: u64,
    #[serde(default)]
    pub high_priority_tasks: u64,
    #[serde(default)]
    pub urgent_priority_tasks: u64,
    #[serde(default)]
    pub completion_rate: f64,
}

/// Per-status and per-priority counts for the dashboard.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Breakdown {
    pub by_status: BTreeMap<TaskStatus, u64>,
    pub by_priority: BTreeMap<TaskPriority, u64>,
}

/// Splits raw tag input on commas, trims every segment and drops empty ones.
/// Order and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_string).collect()
}

/// Inverse of [`parse_tags`] for seeding an edit form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
