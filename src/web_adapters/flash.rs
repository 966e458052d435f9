use actix_session::Session;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

const FLASH_KEY: &str = "_flash_messages";

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

/// Queues a message for the next rendered page.
pub fn push_flash(session: &Session, level: FlashLevel, message: &str) {
    let mut messages = session
        .get::<Vec<FlashMessage>>(FLASH_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    messages.push(FlashMessage {
        level,
        message: message.to_string(),
    });
    if let Err(e) = session.insert(FLASH_KEY, messages) {
        event!(target: "backend", Level::WARN, "Error storing flash message: {:?}", e);
    }
}

/// Drains queued messages; each one is shown once.
pub fn take_flashes(session: &Session) -> Vec<FlashMessage> {
    session
        .remove_as::<Vec<FlashMessage>>(FLASH_KEY)
        .and_then(Result::ok)
        .unwrap_or_default()
}
