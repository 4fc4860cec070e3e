//! Interactive session: renders the screen, asks for an action, turns the
//! answer into an [`Intent`] and dispatches it, until the user quits.

use super::{client, DialoguerConfirm};
use crate::api::TaskFlow;
use crate::libs::{
    app::App,
    config::Config,
    form::FormMode,
    messages::Message,
    task::{Task, TaskFilter, TaskPriority, TaskStatus},
    view::{Intent, View},
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const ACTIONS: [&str; 7] = ["New task", "Edit task", "Change status", "Delete task", "Filter", "Refresh", "Quit"];

pub async fn cmd(config: &Config) -> Result<()> {
    let client = client(config)?;
    msg_print!(Message::SessionStarted(client.base_url().to_string()));

    let mut app = App::new(client, DialoguerConfirm);
    app.start().await;

    loop {
        View::screen(&app.render());

        if app.visibility().is_visible() {
            fill_form(&mut app).await?;
            continue;
        }

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        let intent = match selection {
            0 => Some(Intent::RequestCreate),
            1 => pick_task(app.store().tasks())?.map(Intent::RequestEdit),
            2 => match pick_task(app.store().tasks())? {
                Some(task) => Some(Intent::RequestStatusChange(task.id, select_status(task.status)?)),
                None => None,
            },
            3 => pick_task(app.store().tasks())?.map(|task| Intent::RequestDelete(task.id)),
            4 => Some(Intent::RequestFilterChange(prompt_filter(app.store().filter())?)),
            5 => Some(Intent::Refresh),
            _ => {
                msg_print!(Message::SessionEnded);
                return Ok(());
            }
        };

        if let Some(intent) = intent {
            app.dispatch(intent).await?;
        }
    }
}

/// Walks the open draft field by field, then submits or cancels it.
async fn fill_form(app: &mut App<TaskFlow, DialoguerConfirm>) -> Result<()> {
    let Some(draft) = app.draft_mut() else {
        return Ok(());
    };
    let editing = matches!(draft.mode(), FormMode::Edit(_));
    let theme = ColorfulTheme::default();

    draft.title = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(draft.title.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::TitleRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    draft.description = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(draft.description.clone())
        .allow_empty(true)
        .interact_text()?;
    if editing {
        draft.status = select_status(draft.status)?;
    }
    draft.priority = select_priority(draft.priority)?;
    draft.due_date = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .with_initial_text(draft.due_date.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.assigned_to = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskAssignee.to_string())
        .with_initial_text(draft.assigned_to.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.tags = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTags.to_string())
        .with_initial_text(draft.tags.clone())
        .allow_empty(true)
        .interact_text()?;

    let save = if editing { "Update task" } else { "Create task" };
    let selection = Select::with_theme(&theme).items(&[save, "Cancel"]).default(0).interact()?;

    if selection == 0 {
        app.dispatch(Intent::SubmitForm).await?;
    } else {
        app.dispatch(Intent::CancelForm).await?;
        msg_info!(Message::FormCancelled);
    }
    Ok(())
}

fn pick_task(tasks: &[Task]) -> Result<Option<Task>> {
    if tasks.is_empty() {
        msg_info!(Message::NoTasksToSelect);
        return Ok(None);
    }

    let items: Vec<String> = tasks.iter().map(|t| format!("{} [{}]", t.title, t.status.label())).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| tasks[i].clone()))
}

fn select_status(current: TaskStatus) -> Result<TaskStatus> {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
    let default = TaskStatus::ALL.iter().position(|s| *s == current).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(TaskStatus::ALL[selection])
}

fn select_priority(current: TaskPriority) -> Result<TaskPriority> {
    let labels: Vec<&str> = TaskPriority::ALL.iter().map(|p| p.label()).collect();
    let default = TaskPriority::ALL.iter().position(|p| *p == current).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(TaskPriority::ALL[selection])
}

/// Asks for each filter field; the first entry of each list means "any".
fn prompt_filter(current: &TaskFilter) -> Result<TaskFilter> {
    let theme = ColorfulTheme::default();

    let mut statuses = vec!["Any"];
    statuses.extend(TaskStatus::ALL.iter().map(|s| s.label()));
    let status = Select::with_theme(&theme)
        .with_prompt(Message::PromptFilterStatus.to_string())
        .items(&statuses)
        .default(current.status.and_then(|s| TaskStatus::ALL.iter().position(|x| *x == s)).map_or(0, |i| i + 1))
        .interact()?;

    let mut priorities = vec!["Any"];
    priorities.extend(TaskPriority::ALL.iter().map(|p| p.label()));
    let priority = Select::with_theme(&theme)
        .with_prompt(Message::PromptFilterPriority.to_string())
        .items(&priorities)
        .default(current.priority.and_then(|p| TaskPriority::ALL.iter().position(|x| *x == p)).map_or(0, |i| i + 1))
        .interact()?;

    let assignee: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptFilterAssignee.to_string())
        .with_initial_text(current.assigned_to.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    Ok(TaskFilter {
        status: status.checked_sub(1).map(|i| TaskStatus::ALL[i]),
        priority: priority.checked_sub(1).map(|i| TaskPriority::ALL[i]),
        assigned_to: Some(assignee.trim().to_string()).filter(|a| !a.is_empty()),
    })
}
