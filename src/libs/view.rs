//! View layer: pure rendering of store and form state, plus the intents a
//! user can send back.
//!
//! [`render`] turns a borrowed [`ViewState`] into a [`Screen`] tree and does no
//! I/O. [`View`] prints a screen (and the other read-only views) as terminal
//! tables. Derived values such as the "Overdue" badge are computed on every
//! render and never stored.

use crate::libs::form::{FormMode, TaskForm};
use crate::libs::formatter::{describe_filter, format_due, format_optional, format_rate, format_tags};
use crate::libs::messages::Message;
use crate::libs::task::{AnalyticsSnapshot, Breakdown, Task, TaskFilter, TaskPriority, TaskStatus};
use crate::msg_print;
use chrono::{DateTime, Utc};
use prettytable::{row, Table};

/// User intents emitted by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    RequestCreate,
    RequestEdit(Task),
    RequestDelete(String),
    RequestStatusChange(String, TaskStatus),
    RequestFilterChange(TaskFilter),
    SubmitForm,
    CancelForm,
    Refresh,
}

/// Form visibility: hidden, or open in create or edit mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Visible(FormMode),
}

impl FormVisibility {
    /// "New Task". Only opens a hidden form.
    pub fn open_create(&mut self) {
        if *self == FormVisibility::Hidden {
            *self = FormVisibility::Visible(FormMode::Create);
        }
    }

    /// "Edit" on a task, from any state.
    pub fn open_edit(&mut self, task: Task) {
        *self = FormVisibility::Visible(FormMode::Edit(task));
    }

    /// Cancel or successful submit.
    pub fn close(&mut self) {
        *self = FormVisibility::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, FormVisibility::Visible(_))
    }

    /// Task being edited, if the form is open in edit mode.
    pub fn editing(&self) -> Option<&Task> {
        match self {
            FormVisibility::Visible(FormMode::Edit(task)) => Some(task),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Status(TaskStatus),
    Priority(TaskPriority),
    Overdue,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Status(status) => status.label(),
            Badge::Priority(priority) => priority.label(),
            Badge::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub badges: Vec<Badge>,
    pub due: String,
    pub assigned_to: String,
    pub tags: String,
    pub overdue: bool,
}

impl TaskCard {
    fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        let overdue = task.is_overdue_at(now);
        let mut badges = vec![Badge::Status(task.status), Badge::Priority(task.priority)];
        if overdue {
            badges.push(Badge::Overdue);
        }
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: format_optional(task.description.as_deref()),
            badges,
            due: format_due(task.due_date.as_deref()),
            assigned_to: format_optional(task.assigned_to.as_deref()),
            tags: format_tags(&task.tags),
            overdue,
        }
    }

    /// Whether the card shows `badge`.
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub overdue: u64,
    pub completion_rate: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading,
    Empty,
    Tasks(Vec<TaskCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPanel {
    pub header: String,
    pub fields: Vec<(String, String)>,
}

impl FormPanel {
    fn from_form(form: &TaskForm) -> Self {
        let header = match form.mode() {
            FormMode::Create => Message::FormHeaderCreate.to_string(),
            FormMode::Edit(task) => Message::FormHeaderEdit(task.title.clone()).to_string(),
        };
        let mut fields = vec![
            (Message::PromptTaskTitle.to_string(), form.title.clone()),
            (Message::PromptTaskDescription.to_string(), form.description.clone()),
        ];
        if let FormMode::Edit(_) = form.mode() {
            fields.push((Message::PromptTaskStatus.to_string(), form.status.label().to_string()));
        }
        fields.extend([
            (Message::PromptTaskPriority.to_string(), form.priority.label().to_string()),
            (Message::PromptTaskDueDate.to_string(), form.due_date.clone()),
            (Message::PromptTaskAssignee.to_string(), form.assigned_to.clone()),
            (Message::PromptTaskTags.to_string(), form.tags.clone()),
        ]);
        Self { header, fields }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub dashboard: Dashboard,
    pub filter_bar: String,
    pub body: Body,
    pub form: Option<FormPanel>,
}

impl Screen {
    /// Cards in the body, empty while loading.
    pub fn cards(&self) -> &[TaskCard] {
        match &self.body {
            Body::Tasks(cards) => cards,
            _ => &[],
        }
    }
}

/// Everything a render pass reads, borrowed for that pass only.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub tasks: &'a [Task],
    pub analytics: &'a AnalyticsSnapshot,
    pub filter: &'a TaskFilter,
    pub loading: bool,
    pub form: Option<&'a TaskForm>,
    pub now: DateTime<Utc>,
}

/// Builds the screen for one render pass.
///
/// Pure: the same state and `now` always give the same [`Screen`]. The body is
/// [`Body::Loading`] while `state.loading` is set, [`Body::Empty`] when there is
/// nothing to show, and one [`TaskCard`] per task otherwise, in list order.
/// The form panel is present exactly when a draft is open.
pub fn render(state: &ViewState) -> Screen {
    let analytics = state.analytics;
    let dashboard = Dashboard {
        total: analytics.total_tasks,
        completed: analytics.completed_tasks,
        in_progress: analytics.in_progress_tasks,
        overdue: analytics.overdue_tasks,
        completion_rate: format_rate(analytics.completion_rate),
    };

    let body = if state.loading {
        Body::Loading
    } else if state.tasks.is_empty() {
        Body::Empty
    } else {
        Body::Tasks(state.tasks.iter().map(|t| TaskCard::from_task(t, state.now)).collect())
    };

    Screen {
        dashboard,
        filter_bar: describe_filter(state.filter),
        body,
        form: state.form.map(FormPanel::from_form),
    }
}

/// Terminal printers for screens and the read-only views.
pub struct View {}

impl View {
    /// Prints a whole screen: dashboard, filter bar, body, then the form
    /// panel if one is open.
    pub fn screen(screen: &Screen) {
        Self::dashboard(&screen.dashboard);
        msg_print!(Message::FilterChanged(screen.filter_bar.clone()));

        match &screen.body {
            Body::Loading => msg_print!(Message::TasksLoading),
            Body::Empty => msg_print!(Message::NoTasksFound),
            Body::Tasks(cards) => {
                msg_print!(Message::TasksHeader(cards.len()), true);
                Self::cards(cards);
            }
        }

        if let Some(form) = &screen.form {
            Self::form(form);
        }
    }

    pub fn dashboard(dashboard: &Dashboard) {
        msg_print!(Message::DashboardHeader, true);
        let mut table = Table::new();
        table.add_row(row!["TOTAL", "COMPLETED", "IN PROGRESS", "OVERDUE", "DONE"]);
        table.add_row(row![
            dashboard.total,
            dashboard.completed,
            dashboard.in_progress,
            dashboard.overdue,
            dashboard.completion_rate
        ]);
        table.printstd();
    }

    /// One table row per card; badges are joined with `|`.
    pub fn cards(cards: &[TaskCard]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "BADGES", "DUE", "ASSIGNEE", "TAGS"]);
        for card in cards {
            let badges = card.badges.iter().map(Badge::label).collect::<Vec<_>>().join(" | ");
            table.add_row(row![card.id, card.title, badges, card.due, card.assigned_to, card.tags]);
        }
        table.printstd();
    }

    /// Draft fields as label/value rows under the form header.
    pub fn form(panel: &FormPanel) {
        msg_print!(panel.header, true);
        let mut table = Table::new();
        for (label, value) in &panel.fields {
            table.add_row(row![label, value]);
        }
        table.printstd();
    }

    /// Full detail of a single task.
    pub fn task(task: &Task, now: DateTime<Utc>) {
        let card = TaskCard::from_task(task, now);
        let badges = card.badges.iter().map(Badge::label).collect::<Vec<_>>().join(" | ");
        let mut table = Table::new();
        table.add_row(row!["ID", card.id]);
        table.add_row(row!["TITLE", card.title]);
        table.add_row(row!["DESCRIPTION", card.description]);
        table.add_row(row!["BADGES", badges]);
        table.add_row(row!["DUE", card.due]);
        table.add_row(row!["ASSIGNEE", card.assigned_to]);
        table.add_row(row!["TAGS", card.tags]);
        table.add_row(row!["CREATED", format_optional(task.created_at.as_deref())]);
        table.add_row(row!["UPDATED", format_optional(task.updated_at.as_deref())]);
        table.printstd();
    }

    /// Status and priority counts. Every known status and priority gets a row,
    /// with 0 for the ones the service left out.
    pub fn breakdown(analytics: &AnalyticsSnapshot, breakdown: &Breakdown) {
        msg_print!(Message::TasksByStatusHeader, true);
        let mut table = Table::new();
        table.add_row(row!["STATUS", "COUNT"]);
        for status in TaskStatus::ALL {
            table.add_row(row![status.label(), breakdown.by_status.get(&status).copied().unwrap_or(0)]);
        }
        table.printstd();

        msg_print!(Message::TasksByPriorityHeader, true);
        let mut table = Table::new();
        table.add_row(row!["PRIORITY", "COUNT"]);
        for priority in TaskPriority::ALL {
            table.add_row(row![priority.label(), breakdown.by_priority.get(&priority).copied().unwrap_or(0)]);
        }
        table.add_row(row!["High (overview)", analytics.high_priority_tasks]);
        table.add_row(row!["Urgent (overview)", analytics.urgent_priority_tasks]);
        table.printstd();
    }
}
