use super::{client, DialoguerConfirm};
use crate::api::TaskFlow;
use crate::libs::{
    app::{App, AssumeYes, Confirm, Outcome},
    config::Config,
    messages::Message,
    view::{Intent, View},
};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(config: &Config, args: DeleteArgs) -> Result<()> {
    let client = client(config)?;
    if args.yes {
        run(App::new(client, AssumeYes), &args.id).await
    } else {
        run(App::new(client, DialoguerConfirm), &args.id).await
    }
}

async fn run<C: Confirm>(mut app: App<TaskFlow, C>, id: &str) -> Result<()> {
    // Load first so the prompt can show the title.
    app.start().await;

    match app.dispatch(Intent::RequestDelete(id.to_string())).await? {
        Outcome::Applied => View::screen(&app.render()),
        Outcome::Declined => {}
        Outcome::Unchanged => msg_bail_anyhow!(Message::TaskDeleteFailed),
    }
    Ok(())
}
