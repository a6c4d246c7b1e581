//! Chat front end for `chat_tictactoe` sessions.
//!
//! The messaging platform talks to the engine through this crate:
//!
//! - **Chat**: `/start`, `/newgame` and board button presses
//! - **Render**: board keyboard and status texts
//! - **HTTP**: JSON API for sessions and chat updates (axum)
//! - **Console**: terminal stand-in for the messaging platform
//! - **Config / logging**: TOML + environment config, tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chat;
mod cli;
mod config;
mod console;
mod http;
mod logging;
mod render;

pub use chat::{BotCommand, ChatBot, ChatUpdate, Reply};
pub use cli::{Cli, Command};
pub use config::{ConfigError, HOST_VAR, PORT_VAR, ServerConfig};
pub use console::{format_reply, parse_line, run_console};
pub use http::{ApiError, ErrorBody, MoveRequest, router, serve};
pub use logging::init_tracing;
pub use render::{
    CROSS_LABEL, EMPTY_LABEL, KeyButton, Keyboard, NOUGHT_LABEL, cell_label, error_text,
    new_game_text, side_name, status_text,
};
