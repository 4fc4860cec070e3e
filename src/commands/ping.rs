use super::client;
use crate::api::TaskService;
use crate::libs::{config::Config, messages::Message};
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;

pub async fn cmd(config: &Config) -> Result<()> {
    let message = client(config)?
        .ping()
        .await
        .map_err(|e| msg_error_anyhow!(Message::PingFailed(e.to_string())))?;

    msg_success!(Message::PingOk(message));
    Ok(())
}
