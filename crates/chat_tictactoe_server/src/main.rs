//! Tic-tac-toe chat bot entry point.

use anyhow::Result;
use chat_tictactoe::{SessionId, SessionStore};
use chat_tictactoe_server::{ChatBot, Cli, Command, ServerConfig, init_tracing, run_console, serve};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ServerConfig::load(Some(cli.config.as_path()))?;
    init_tracing(config.log_filter());

    let store = SessionStore::new();

    match cli.command {
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(port) = port {
                config = config.with_port(port);
            }
            info!(addr = %config.bind_addr(), "Starting tic-tac-toe HTTP server");
            serve(&config, store).await
        }
        Command::Chat { chat_id, name } => {
            run_console(ChatBot::new(store), SessionId::from(chat_id), name).await
        }
    }
}
