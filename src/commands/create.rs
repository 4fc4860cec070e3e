use super::{client, DialoguerConfirm};
use crate::libs::{
    app::App,
    config::Config,
    messages::Message,
    task::TaskPriority,
    view::{Intent, View},
};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    #[arg(short, long, default_value = "")]
    description: String,
    #[arg(short, long, value_enum, default_value_t = TaskPriority::Medium)]
    priority: TaskPriority,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    due: Option<String>,
    #[arg(short, long)]
    assignee: Option<String>,
    /// Comma-separated tags, e.g. "backend, api"
    #[arg(short, long, default_value = "")]
    tags: String,
}

pub async fn cmd(config: &Config, args: CreateArgs) -> Result<()> {
    let mut app = App::new(client(config)?, DialoguerConfirm);
    app.dispatch(Intent::RequestCreate).await?;

    if let Some(draft) = app.draft_mut() {
        draft.title = args.title;
        draft.description = args.description;
        draft.priority = args.priority;
        draft.due_date = args.due.unwrap_or_default();
        draft.assigned_to = args.assignee.unwrap_or_default();
        draft.tags = args.tags;
    }

    if !app.dispatch(Intent::SubmitForm).await?.applied() {
        msg_bail_anyhow!(Message::TaskCreateFailed);
    }

    View::screen(&app.render());
    Ok(())
}
