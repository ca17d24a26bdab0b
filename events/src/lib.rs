//! Shared event model and JSON codec for the realtime chat bus.
//!
//! This crate owns the wire representation used on the websocket between
//! the chat client and its server. Frames are JSON text of the shape
//! `{"event": <name>, "data": {...}}`; payloads stay tolerant of missing
//! optional fields so the client keeps rendering across server versions.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text could not be decoded as a JSON event frame, or the
    /// payload did not match the event's expected shape.
    #[error("failed to decode event frame: {0}")]
    Decode(#[from] serde_json::Error),
    /// The envelope parsed, but the `event` name is not one we consume.
    #[error("unknown event name: {0}")]
    UnknownEvent(String),
}

/// An inbound event consumed by the client.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerEvent {
    /// A chat message routed to this room.
    Message(MessageBody),
    /// A member joined the room.
    Connected(Presence),
    /// A member left the room.
    Disconnected(Presence),
}

/// An outbound event emitted by the client.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientEvent {
    /// The text of one user-submitted chat message.
    Message(OutgoingMessage),
}

/// Payload of an inbound `message` event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Display name of the sender. Absent on room-wide notices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Message text.
    pub message: String,
    /// True for room-wide notices carrying no sender attribution.
    #[serde(default)]
    pub is_global: bool,
}

/// Payload of the `connected` and `disconnected` membership events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    /// Display name of the member, unique within a room.
    pub name: String,
}

/// Payload of an outbound `message` event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Raw input-field text.
    pub data: String,
}

/// Envelope shared by every frame on the wire.
#[derive(Serialize, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

/// Encode an outbound event into a JSON text frame.
///
/// # Panics
///
/// Never panics in practice; serializing these payload types to a JSON
/// string is infallible.
#[must_use]
pub fn encode_event(event: &ClientEvent) -> String {
    let envelope = match event {
        ClientEvent::Message(payload) => Envelope {
            event: "message".to_owned(),
            data: serde_json::to_value(payload).unwrap_or_default(),
        },
    };
    serde_json::to_string(&envelope).unwrap_or_default()
}

/// Decode a JSON text frame into an inbound event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed text or payloads and
/// [`CodecError::UnknownEvent`] for event names this client does not
/// consume.
pub fn decode_event(text: &str) -> Result<ServerEvent, CodecError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    match envelope.event.as_str() {
        "message" => Ok(ServerEvent::Message(serde_json::from_value(
            envelope.data,
        )?)),
        "connected" => Ok(ServerEvent::Connected(serde_json::from_value(
            envelope.data,
        )?)),
        "disconnected" => Ok(ServerEvent::Disconnected(serde_json::from_value(
            envelope.data,
        )?)),
        other => Err(CodecError::UnknownEvent(other.to_owned())),
    }
}
