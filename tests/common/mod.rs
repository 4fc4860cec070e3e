//! In-memory task service shared by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};
use taskflow::api::{ApiError, TaskService};
use taskflow::libs::task::{
    AnalyticsSnapshot, Breakdown, NewTask, Task, TaskFilter, TaskPatch, TaskPriority, TaskStatus,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(TaskFilter),
    Get(String),
    Create(NewTask),
    Update(String, TaskPatch),
    Delete(String),
    Analytics,
    Breakdown,
    Ping,
}

#[derive(Debug, Default)]
pub struct State {
    pub tasks: Vec<Task>,
    pub calls: Vec<Call>,
    pub next_id: u64,
    pub fail_list: bool,
    pub fail_analytics: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
}

/// Cloneable handle; clones share the same state so a test can inspect what
/// the store sent after handing the service over.
#[derive(Debug, Clone, Default)]
pub struct MockService {
    state: Arc<Mutex<State>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let service = Self::new();
        service.state().tasks = tasks;
        service
    }

    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Calls other than the two reads every refresh makes.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::List(_) | Call::Analytics))
            .collect()
    }

    fn fail(what: &str) -> ApiError {
        ApiError::Decode(format!("mock {} failure", what))
    }
}

pub fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        due_date: None,
        assigned_to: None,
        tags: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

fn matches_filter(task: &Task, filter: &TaskFilter) -> bool {
    filter.status.map_or(true, |s| task.status == s)
        && filter.priority.map_or(true, |p| task.priority == p)
        && filter
            .assigned_to
            .as_deref()
            .filter(|a| !a.is_empty())
            .map_or(true, |a| task.assigned_to.as_deref() == Some(a))
}

impl TaskService for MockService {
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
        let mut state = self.state();
        state.calls.push(Call::List(filter.clone()));
        if state.fail_list {
            return Err(Self::fail("list"));
        }
        Ok(state.tasks.iter().filter(|t| matches_filter(t, filter)).cloned().collect())
    }

    async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        let mut state = self.state();
        state.calls.push(Call::Get(id.to_string()));
        state.tasks.iter().find(|t| t.id == id).cloned().ok_or_else(|| Self::fail("get"))
    }

    async fn create_task(&self, fields: &NewTask) -> Result<Task, ApiError> {
        let mut state = self.state();
        state.calls.push(Call::Create(fields.clone()));
        if state.fail_create {
            return Err(Self::fail("create"));
        }
        state.next_id += 1;
        let created = Task {
            id: format!("task-{}", state.next_id),
            title: fields.title.clone(),
            description: Some(fields.description.clone()),
            status: TaskStatus::Todo,
            priority: fields.priority,
            due_date: fields.due_date.clone(),
            assigned_to: fields.assigned_to.clone(),
            tags: fields.tags.clone(),
            created_at: None,
            updated_at: None,
        };
        state.tasks.push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let mut state = self.state();
        state.calls.push(Call::Update(id.to_string(), patch.clone()));
        if state.fail_update {
            return Err(Self::fail("update"));
        }
        let task = state.tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| Self::fail("update"))?;
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(due_date) = &patch.due_date {
            task.due_date = Some(due_date.clone());
        }
        if let Some(assigned_to) = &patch.assigned_to {
            task.assigned_to = Some(assigned_to.clone());
        }
        if let Some(tags) = &patch.tags {
            task.tags = tags.clone();
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.state();
        state.calls.push(Call::Delete(id.to_string()));
        if state.fail_delete {
            return Err(Self::fail("delete"));
        }
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(Self::fail("delete"));
        }
        Ok(())
    }

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        let mut state = self.state();
        state.calls.push(Call::Analytics);
        if state.fail_analytics {
            return Err(Self::fail("analytics"));
        }
        let count = |f: &dyn Fn(&Task) -> bool| state.tasks.iter().filter(|t| f(t)).count() as u64;
        let total = state.tasks.len() as u64;
        let completed = count(&|t| t.status == TaskStatus::Completed);
        Ok(AnalyticsSnapshot {
            total_tasks: total,
            completed_tasks: completed,
            in_progress_tasks: count(&|t| t.status == TaskStatus::InProgress),
            overdue_tasks: count(&|t| t.is_overdue()),
            todo_tasks: count(&|t| t.status == TaskStatus::Todo),
            high_priority_tasks: count(&|t| t.priority == TaskPriority::High),
            urgent_priority_tasks: count(&|t| t.priority == TaskPriority::Urgent),
            completion_rate: if total == 0 { 0.0 } else { completed as f64 / total as f64 * 100.0 },
        })
    }

    async fn get_breakdown(&self) -> Result<Breakdown, ApiError> {
        let mut state = self.state();
        state.calls.push(Call::Breakdown);
        let mut breakdown = Breakdown::default();
        for task in &state.tasks {
            *breakdown.by_status.entry(task.status).or_default() += 1;
            *breakdown.by_priority.entry(task.priority).or_default() += 1;
        }
        Ok(breakdown)
    }

    async fn ping(&self) -> Result<String, ApiError> {
        self.state().calls.push(Call::Ping);
        Ok("TaskFlow Manager API".to_string())
    }
}
