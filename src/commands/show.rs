use super::client;
use crate::libs::{config::Config, messages::Message, store::TaskStore, view::View};
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
}

pub async fn cmd(config: &Config, args: ShowArgs) -> Result<()> {
    let store = TaskStore::new(client(config)?);
    match store.task(&args.id).await {
        Some(task) => View::task(&task, Utc::now()),
        None => msg_bail_anyhow!(Message::TaskNotFound(args.id.clone())),
    }
    Ok(())
}
