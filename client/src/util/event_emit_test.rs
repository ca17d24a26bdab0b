use super::*;

#[test]
fn chat_message_event_carries_input_text_verbatim() {
    let event = chat_message_event("hello room").expect("non-empty input should build");
    let ClientEvent::Message(payload) = event;
    assert_eq!(payload.data, "hello room");
}

#[test]
fn chat_message_event_preserves_whitespace_only_input() {
    // Only the exactly-empty string is rejected; whitespace is a valid
    // message body.
    let event = chat_message_event("   ").expect("whitespace input should build");
    let ClientEvent::Message(payload) = event;
    assert_eq!(payload.data, "   ");
}

#[test]
fn chat_message_event_rejects_empty_input() {
    assert_eq!(chat_message_event(""), None);
}
