//! CLI entry point for MoodSync.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::{Cli, Command};

/// Load configuration env files. Order: 1) ~/.moodsync/env  2) project .env
/// (walking up from the current directory). Values already set in the
/// environment win.
fn load_moodsync_env() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home
            .join(moodsync_constant::app::DATA_DIR)
            .join(moodsync_constant::app::ENV_FILE);
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_moodsync_env();
    let cli = Cli::parse();
    output::init(cli.output);

    let log_level = if cli.verbose { "debug" } else { "info" };

    match cli.command {
        // The TUI owns the terminal and initializes tracing with a log sink.
        Command::Tui { provider, light } => commands::tui::run(provider, light, log_level).await,
        command => {
            moodsync_observability::init(
                moodsync_observability::ObservabilityConfig::new(moodsync_constant::app::NAME)
                    .with_log_level(log_level)
                    .with_console(cli.verbose),
            )?;
            match command {
                Command::Login { email } => commands::auth::login(email).await,
                Command::Register { username, email } => {
                    commands::auth::register(username, email).await
                }
                Command::Logout => commands::auth::logout(),
                Command::Chat { message, provider } => {
                    commands::chat::run(message, provider).await
                }
                Command::Catalog { mood } => commands::catalog::run(mood),
                Command::Providers { action } => commands::providers::run(action),
                Command::Tui { .. } => unreachable!("matched above"),
            }
        }
    }
}
