use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::{handle_runtime_commands, handle_setup_commands};
use services::settings::{load_config, resolve};
use services::storage::home_dir;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let home = home_dir();
    let config = load_config(home.as_deref())?;
    let login_shell = std::env::var("SHELL").ok();
    let settings = resolve(&cli, &config, home.as_deref(), login_shell.as_deref());
    tracing::debug!(?settings, mode = ?cli.mode(), "resolved settings");

    if !handle_setup_commands(&cli, &settings)? {
        handle_runtime_commands(&cli, &settings)?;
    }
    Ok(())
}

/// Logs go to stderr; stdout is the filter's output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("claude_emotion=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
