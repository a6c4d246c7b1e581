//! Console stand-in for the messaging platform.
//!
//! Each stdin line becomes a [`ChatUpdate`] for a single chat: lines starting
//! with `/` are commands, anything else is a board button press.

use crate::chat::{ChatBot, ChatUpdate, Reply};
use anyhow::Result;
use chat_tictactoe::SessionId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};

/// Turns a console line into an update. Blank lines yield `None`.
pub fn parse_line(line: &str, first_name: Option<&str>) -> Option<ChatUpdate> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let update = if line.starts_with('/') {
        ChatUpdate::Command {
            text: line.to_string(),
            first_name: first_name.map(str::to_string),
        }
    } else {
        ChatUpdate::Callback {
            data: line.to_string(),
        }
    };
    Some(update)
}

/// Formats a reply for the terminal.
pub fn format_reply(reply: &Reply) -> String {
    match reply {
        Reply::Message {
            text,
            keyboard: Some(keyboard),
        }
        | Reply::EditMessage { text, keyboard } => format!("{}\n{}", text, keyboard.to_text()),
        Reply::Message {
            text,
            keyboard: None,
        } => text.clone(),
        Reply::CallbackAnswer { text: Some(text) } => format!("> {}", text),
        Reply::CallbackAnswer { text: None } => String::new(),
    }
}

/// Reads stdin until EOF, printing the bot's replies.
#[instrument(skip(bot, chat_id, first_name), fields(chat_id = %chat_id))]
pub async fn run_console(bot: ChatBot, chat_id: SessionId, first_name: Option<String>) -> Result<()> {
    info!("Console chat started");
    println!("Type /start or /newgame, then a cell number (0-8) to play. Ctrl+D exits.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(update) = parse_line(&line, first_name.as_deref()) else {
            continue;
        };
        let output = format_reply(&bot.handle(&chat_id, update));
        if !output.is_empty() {
            println!("{}", output);
        }
    }

    info!("Console chat finished");
    Ok(())
}
