use super::{client, DialoguerConfirm};
use crate::libs::{
    app::App,
    config::Config,
    messages::Message,
    task::TaskStatus,
    view::{Intent, View},
};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
    /// New status
    #[arg(required = true, value_enum)]
    status: TaskStatus,
}

pub async fn cmd(config: &Config, args: StatusArgs) -> Result<()> {
    let mut app = App::new(client(config)?, DialoguerConfirm);

    if !app.dispatch(Intent::RequestStatusChange(args.id, args.status)).await?.applied() {
        msg_bail_anyhow!(Message::TaskStatusChangeFailed);
    }

    View::screen(&app.render());
    Ok(())
}
