use std::process::ExitCode;

use clap::Parser;

use slot_terminal::cli::Cli;
use slot_terminal::core::ClientConfig;
use slot_terminal::debug::{init_logger, LogConfig};
use slot_terminal::ui::{print_error, print_info};
use slot_terminal::App;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };
    if let Some(server) = cli.server {
        config.api_url = server;
    }
    if let Some(game) = cli.game {
        config.select_game(game);
    }

    let _log_guard = init_logger(&LogConfig::from_env(&config));
    tracing::info!(api_url = %config.api_url, "Starting slot-terminal");

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            print_error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match app.run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            print_error(&e.to_string());
            if e.requires_login() && !app.store.is_logged_in() {
                print_info("Log in with `slot-terminal login -u <username>`");
            }
            ExitCode::FAILURE
        }
    }
}
