//! Message-list state for the active room.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use events::MessageBody;

/// State for the room's message list.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Rendered entries, oldest first.
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append the newest entry at the end of the list.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// A single rendered chat entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Display name of the sender; room-wide notices carry none.
    pub sender_name: Option<String>,
    /// Message text.
    pub body: String,
    /// True for room-wide notices rendered without attribution.
    pub is_broadcast: bool,
    /// Viewer-clock receipt time in milliseconds since the Unix epoch.
    pub received_at_ms: f64,
}

impl ChatMessage {
    /// Build an entry from an inbound message payload.
    ///
    /// Room-wide notices drop sender attribution even when the payload
    /// names one.
    #[must_use]
    pub fn from_event(body: MessageBody, received_at_ms: f64) -> Self {
        let sender_name = if body.is_global { None } else { body.name };
        Self {
            sender_name,
            body: body.message,
            is_broadcast: body.is_global,
            received_at_ms,
        }
    }
}
