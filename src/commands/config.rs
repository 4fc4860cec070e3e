use crate::libs::{config::Config, messages::Message};
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub fn cmd(config: &Config) -> Result<()> {
    msg_print!(Message::ConfigHeader, true);

    let timeout = config
        .timeout
        .map(|t| format!("{}s", t.as_secs()))
        .unwrap_or_else(|| "client default".to_string());

    let mut table = Table::new();
    table.add_row(row!["BACKEND URL", config.api_url]);
    table.add_row(row!["TIMEOUT", timeout]);
    table.printstd();
    Ok(())
}
