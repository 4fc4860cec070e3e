//! Display implementation for taskflow messages.
//!
//! All user-facing text is defined here, in one match over [`Message`].
//! Callers never build message strings themselves; they pick a variant and
//! hand it to one of the `msg_*!` macros or call `.to_string()` for prompts.
//!
//! ```rust
//! use taskflow::libs::messages::Message;
//!
//! assert_eq!(Message::TaskCreated("Write docs".into()).to_string(), "Task 'Write docs' created");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskStatusChanged(id, status) => format!("Task {} moved to {}", id, status),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskUpdateFailed => "Failed to update task".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task".to_string(),
            Message::TaskStatusChangeFailed => "Failed to change task status".to_string(),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TasksHeader(count) => format!("Tasks ({})", count),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksLoading => "Loading tasks...".to_string(),
            Message::TasksLoadFailed => "Failed to load tasks".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::TitleRequired => "Title is required".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),

            // === FORM MESSAGES ===
            Message::FormHeaderCreate => "New Task".to_string(),
            Message::FormHeaderEdit(title) => format!("Edit Task: {}", title),
            Message::FormCancelled => "Changes discarded".to_string(),

            // === FILTER MESSAGES ===
            Message::FilterChanged(description) => format!("Filter: {}", description),

            // === ANALYTICS MESSAGES ===
            Message::DashboardHeader => "TaskFlow Manager".to_string(),
            Message::TasksByStatusHeader => "Tasks by status".to_string(),
            Message::TasksByPriorityHeader => "Tasks by priority".to_string(),

            // === API MESSAGES ===
            Message::RequestFailed(operation, error) => format!("Request '{}' failed: {}", operation, error),
            Message::RefreshFailed(error) => format!("Failed to refresh tasks: {}", error),
            Message::BreakdownFailed(error) => format!("Failed to load task breakdown: {}", error),
            Message::PingOk(message) => format!("Service is up: {}", message),
            Message::PingFailed(error) => format!("Service is unreachable: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigHeader => "Configuration".to_string(),
            Message::ConfigBackendUrlMissing(var) => format!("Backend URL is not set. Export {} or add it to .env", var),
            Message::ConfigBackendUrlInvalid(value) => format!("Backend URL '{}' is not a valid http(s) URL", value),
            Message::ConfigTimeoutInvalid(value) => format!("Request timeout '{}' is not a number of seconds", value),

            // === SESSION MESSAGES ===
            Message::SessionStarted(url) => format!("Connected to {}", url),
            Message::SessionEnded => "Bye!".to_string(),
            Message::NoTasksToSelect => "There are no tasks to pick from".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskAssignee => "Assigned to".to_string(),
            Message::PromptTaskTags => "Tags (comma separated)".to_string(),
            Message::PromptSelectAction => "What do you want to do?".to_string(),
            Message::PromptSelectTask => "Select task".to_string(),
            Message::PromptFilterStatus => "Filter by status".to_string(),
            Message::PromptFilterPriority => "Filter by priority".to_string(),
            Message::PromptFilterAssignee => "Filter by assignee (empty for any)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
