use std::io::IsTerminal;
use taskflow::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu().await
}

/// Logs go to stderr so they never mix with tables on stdout. Nothing below
/// `warn` is shown unless `RUST_LOG` or `TASKFLOW_DEBUG` asks for it.
fn init_tracing() {
    let default_level = if std::env::var("TASKFLOW_DEBUG").is_ok() { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
