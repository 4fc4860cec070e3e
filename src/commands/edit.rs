//! Non-interactive edit: the form is seeded from the current task, flags
//! overwrite individual fields and the whole form is submitted.

use super::{client, DialoguerConfirm};
use crate::libs::{
    app::App,
    config::Config,
    messages::Message,
    task::{TaskPriority, TaskStatus},
    view::{Intent, View},
};
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
    #[arg(short, long, value_enum)]
    priority: Option<TaskPriority>,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    due: Option<String>,
    #[arg(short, long)]
    assignee: Option<String>,
    /// Comma-separated tags; replaces the current ones
    #[arg(short, long)]
    tags: Option<String>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.due.is_some()
            || self.assignee.is_some()
            || self.tags.is_some()
    }
}

pub async fn cmd(config: &Config, args: EditArgs) -> Result<()> {
    if !args.has_changes() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let mut app = App::new(client(config)?, DialoguerConfirm);
    let task = match app.store().task(&args.id).await {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::TaskNotFound(args.id.clone())),
    };
    app.dispatch(Intent::RequestEdit(task)).await?;

    if let Some(draft) = app.draft_mut() {
        if let Some(title) = args.title {
            draft.title = title;
        }
        if let Some(description) = args.description {
            draft.description = description;
        }
        if let Some(status) = args.status {
            draft.status = status;
        }
        if let Some(priority) = args.priority {
            draft.priority = priority;
        }
        if let Some(due) = args.due {
            draft.due_date = due;
        }
        if let Some(assignee) = args.assignee {
            draft.assigned_to = assignee;
        }
        if let Some(tags) = args.tags {
            draft.tags = tags;
        }
    }

    if !app.dispatch(Intent::SubmitForm).await?.applied() {
        msg_bail_anyhow!(Message::TaskUpdateFailed);
    }

    View::screen(&app.render());
    Ok(())
}
