//! Draft state behind the create/edit form.
//!
//! A [`TaskForm`] is a local copy that the store never sees until
//! [`TaskForm::submit`] turns it into a [`Submission`]. Tags stay a single raw
//! string while the user edits and are split only at submit time.

use crate::libs::messages::Message;
use crate::libs::task::{join_tags, parse_tags, NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Task),
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{}", Message::TitleRequired)]
    TitleRequired,
}

/// What a submitted form asks the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(NewTask),
    Update { id: String, patch: TaskPatch },
}

impl Submission {
    pub fn title(&self) -> &str {
        match self {
            Submission::Create(fields) => &fields.title,
            Submission::Update { patch, .. } => patch.title.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    mode: FormMode,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Free text; the service decides whether it is a date.
    pub due_date: String,
    pub assigned_to: String,
    /// Raw comma-separated input.
    pub tags: String,
}

impl TaskForm {
    /// Empty draft for a new task. Priority starts at medium.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: String::new(),
            assigned_to: String::new(),
            tags: String::new(),
        }
    }

    /// Draft seeded from an existing task.
    pub fn edit(task: &Task) -> Self {
        Self {
            mode: FormMode::Edit(task.clone()),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date.clone().unwrap_or_default(),
            assigned_to: task.assigned_to.clone().unwrap_or_default(),
            tags: join_tags(&task.tags),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// The task being edited, if any.
    pub fn target(&self) -> Option<&Task> {
        match &self.mode {
            FormMode::Edit(task) => Some(task),
            FormMode::Create => None,
        }
    }

    /// Converts the draft into a create or update request.
    ///
    /// Only the title is checked. Status is left out on create so the service
    /// default applies; empty due date and assignee are sent as absent.
    ///
    /// On update, emptying an assignee the task had sends `""` so the service
    /// clears it. An emptied due date is still sent as absent: the service
    /// ignores null keys and rejects `""` as a date, so a due date can be
    /// changed but not removed.
    pub fn submit(&self) -> Result<Submission, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        let tags = parse_tags(&self.tags);

        match &self.mode {
            FormMode::Create => Ok(Submission::Create(NewTask {
                title: title.to_string(),
                description: self.description.clone(),
                priority: self.priority,
                due_date: non_empty(&self.due_date),
                assigned_to: non_empty(&self.assigned_to),
                tags,
            })),
            FormMode::Edit(task) => Ok(Submission::Update {
                id: task.id.clone(),
                patch: TaskPatch {
                    title: Some(title.to_string()),
                    description: Some(self.description.clone()),
                    status: Some(self.status),
                    priority: Some(self.priority),
                    due_date: non_empty(&self.due_date),
                    assigned_to: cleared_or_set(&self.assigned_to, task.assigned_to.as_deref()),
                    tags: Some(tags),
                },
            }),
        }
    }

    /// Drops the draft. Nothing is sent anywhere.
    pub fn cancel(self) {}
}

/// Edit-mode assignee: the new value, `""` when a previous value was erased,
/// or absent when there was nothing to begin with.
fn cleared_or_set(value: &str, previous: Option<&str>) -> Option<String> {
    match non_empty(value) {
        Some(value) => Some(value),
        None if previous.is_some_and(|p| !p.trim().is_empty()) => Some(String::new()),
        None => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
