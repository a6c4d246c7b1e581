//! Command-line interface for the tic-tac-toe bot.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe chat bot - one game per conversation
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bot")]
#[command(about = "Tic-tac-toe sessions for chat conversations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe_bot.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Host to bind to (overrides config and environment)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and environment)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Chat with the bot from the terminal
    Chat {
        /// Chat id the console session plays in
        #[arg(long, default_value = "console")]
        chat_id: String,

        /// First name used in the greeting
        #[arg(long)]
        name: Option<String>,
    },
}
