use super::{client, DialoguerConfirm};
use crate::libs::{
    app::App,
    config::Config,
    messages::Message,
    view::View,
};
use crate::msg_bail_anyhow;
use anyhow::Result;

pub async fn cmd(config: &Config) -> Result<()> {
    let mut app = App::new(client(config)?, DialoguerConfirm);
    if !app.start().await {
        msg_bail_anyhow!(Message::TasksLoadFailed);
    }

    View::dashboard(&app.render().dashboard);
    if let Some(breakdown) = app.store().breakdown().await {
        View::breakdown(app.store().analytics(), &breakdown);
    }
    Ok(())
}
