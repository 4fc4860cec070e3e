use super::{client, DialoguerConfirm};
use crate::libs::{
    app::App,
    config::Config,
    messages::Message,
    task::{TaskFilter, TaskPriority, TaskStatus},
    view::{Intent, View},
};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks with this status
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
    /// Only tasks with this priority
    #[arg(short, long, value_enum)]
    priority: Option<TaskPriority>,
    /// Only tasks assigned to this person
    #[arg(short, long)]
    assignee: Option<String>,
}

pub async fn cmd(config: &Config, args: ListArgs) -> Result<()> {
    let mut app = App::new(client(config)?, DialoguerConfirm);
    let filter = TaskFilter {
        status: args.status,
        priority: args.priority,
        assigned_to: args.assignee,
    };

    if !app.dispatch(Intent::RequestFilterChange(filter)).await?.applied() {
        msg_bail_anyhow!(Message::TasksLoadFailed);
    }

    View::screen(&app.render());
    Ok(())
}
