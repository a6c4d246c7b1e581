//! Chat bot: turns chat updates into session operations and replies.

use crate::render::{self, Keyboard};
use chat_tictactoe::{GameError, SessionId, SessionStore};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum BotCommand {
    /// Greets the user.
    #[strum(serialize = "/start")]
    Start,
    /// Starts (or restarts) the game for the chat.
    #[strum(serialize = "/newgame")]
    NewGame,
}

impl BotCommand {
    /// Parses the first word of a message, ignoring a `@botname` suffix.
    pub fn parse(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let name = word.split('@').next().unwrap_or(word);
        Self::from_str(name).ok()
    }
}

/// An event delivered by the messaging platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatUpdate {
    /// A text message.
    Command {
        /// Message text, e.g. `/newgame`.
        text: String,
        /// First name of the sender, if known.
        #[serde(default)]
        first_name: Option<String>,
    },
    /// A board button press.
    Callback {
        /// Button data: the cell index.
        data: String,
    },
}

/// What the bot sends back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    /// Send a new message.
    Message {
        /// Message text.
        text: String,
        /// Board keyboard attached to the message.
        keyboard: Option<Keyboard>,
    },
    /// Replace the text and keyboard of the board message.
    EditMessage {
        /// New text.
        text: String,
        /// New keyboard.
        keyboard: Keyboard,
    },
    /// Answer the button press with a short notice (or silently).
    CallbackAnswer {
        /// Notice text.
        text: Option<String>,
    },
}

const HELP_TEXT: &str = "Commands:\n/start - about this bot\n/newgame - start a new game";

/// Tic-tac-toe chat bot over a shared session store.
#[derive(Debug, Clone)]
pub struct ChatBot {
    store: SessionStore,
}

impl ChatBot {
    /// Creates a bot backed by `store`.
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// The session store behind the bot.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handles one update for a chat.
    #[instrument(skip(self, chat_id), fields(chat_id = %chat_id))]
    pub fn handle(&self, chat_id: &SessionId, update: ChatUpdate) -> Reply {
        match update {
            ChatUpdate::Command { text, first_name } => {
                self.handle_command(chat_id, &text, first_name.as_deref())
            }
            ChatUpdate::Callback { data } => self.handle_callback(chat_id, &data),
        }
    }

    fn handle_command(&self, chat_id: &SessionId, text: &str, first_name: Option<&str>) -> Reply {
        match BotCommand::parse(text) {
            Some(BotCommand::Start) => Reply::Message {
                text: greeting(first_name),
                keyboard: None,
            },
            Some(BotCommand::NewGame) => {
                let snapshot = self.store.start_session(chat_id);
                info!("New game started");
                Reply::Message {
                    text: render::new_game_text(),
                    keyboard: Some(Keyboard::from_snapshot(&snapshot)),
                }
            }
            None => {
                debug!(text, "Unrecognised message");
                Reply::Message {
                    text: HELP_TEXT.to_string(),
                    keyboard: None,
                }
            }
        }
    }

    fn handle_callback(&self, chat_id: &SessionId, data: &str) -> Reply {
        let Ok(cell) = data.trim().parse::<usize>() else {
            warn!(data, "Malformed callback data");
            return Reply::CallbackAnswer { text: None };
        };

        match self.store.submit_move(chat_id, cell) {
            Ok(snapshot) => {
                info!(cell, outcome = ?snapshot.outcome(), "Move accepted");
                Reply::EditMessage {
                    text: render::status_text(&snapshot),
                    keyboard: Keyboard::from_snapshot(&snapshot),
                }
            }
            Err(error) => {
                match &error {
                    GameError::IndexOutOfRange { .. } => {
                        warn!(cell, %error, "Callback carried an invalid cell");
                    }
                    _ => debug!(cell, %error, "Move rejected"),
                }
                Reply::CallbackAnswer {
                    text: render::error_text(&error).map(str::to_string),
                }
            }
        }
    }
}

fn greeting(first_name: Option<&str>) -> String {
    let name = first_name.unwrap_or("there");
    format!("Hi, {}! I'm a tic-tac-toe bot. Use /newgame to start a new game.", name)
}
