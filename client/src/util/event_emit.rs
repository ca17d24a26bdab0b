//! Outbound event builders.
//!
//! Every message the client sends to the bus is a `message` event whose
//! payload carries the raw input-field text. Submission is
//! fire-and-forget: no retry, no acknowledgement.

#[cfg(test)]
#[path = "event_emit_test.rs"]
mod event_emit_test;

use events::{ClientEvent, OutgoingMessage};
use leptos::prelude::{GetUntracked, RwSignal};

use crate::app::BusSender;

/// Build the outbound event for one submitted message.
///
/// Returns `None` for the empty string; empty submissions are dropped
/// silently without touching the bus.
#[must_use]
pub fn chat_message_event(text: &str) -> Option<ClientEvent> {
    if text.is_empty() {
        return None;
    }
    Some(ClientEvent::Message(OutgoingMessage {
        data: text.to_owned(),
    }))
}

/// Emit one user-submitted message onto the bus.
///
/// Returns `true` when the text was accepted for sending (whether or
/// not a connection channel is currently live).
pub fn send_chat_message(sender: RwSignal<BusSender>, text: &str) -> bool {
    let Some(event) = chat_message_event(text) else {
        return false;
    };
    let _ = sender.get_untracked().send(&event);
    true
}
