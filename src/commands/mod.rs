pub mod app;
pub mod config;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod list;
pub mod ping;
pub mod show;
pub mod status;

use crate::api::TaskFlow;
use crate::libs::app::Confirm;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::theme::ColorfulTheme;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive session (default)")]
    App,
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Create a task")]
    Create(create::CreateArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Change the status of a task", arg_required_else_help = true)]
    Status(status::StatusArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show analytics")]
    Dashboard,
    #[command(about = "Check that the task service is reachable")]
    Ping,
    #[command(about = "Show the resolved configuration")]
    Config,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task service base URL, overrides TASKFLOW_BACKEND_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = load_config(cli.api_url)?;

        match cli.command.unwrap_or(Commands::App) {
            Commands::App => app::cmd(&config).await,
            Commands::List(args) => list::cmd(&config, args).await,
            Commands::Show(args) => show::cmd(&config, args).await,
            Commands::Create(args) => create::cmd(&config, args).await,
            Commands::Edit(args) => edit::cmd(&config, args).await,
            Commands::Status(args) => status::cmd(&config, args).await,
            Commands::Delete(args) => delete::cmd(&config, args).await,
            Commands::Dashboard => dashboard::cmd(&config).await,
            Commands::Ping => ping::cmd(&config).await,
            Commands::Config => config::cmd(&config),
        }
    }
}

/// Environment configuration with the `--api-url` override applied. The flag
/// alone is enough when the environment has no base URL.
pub fn load_config(api_url: Option<String>) -> Result<Config> {
    Ok(Config::read_with(api_url.as_deref())?)
}

/// HTTP client for the configured service.
pub fn client(config: &Config) -> Result<TaskFlow> {
    Ok(TaskFlow::new(config)?)
}

/// Terminal yes/no prompt, defaulting to "no".
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}
