use super::*;

fn direct_body(name: &str, message: &str) -> MessageBody {
    MessageBody {
        name: Some(name.to_owned()),
        message: message.to_owned(),
        is_global: false,
    }
}

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn push_appends_newest_at_the_end() {
    let mut state = ChatState::default();
    state.push(ChatMessage::from_event(direct_body("alice", "first"), 1.0));
    state.push(ChatMessage::from_event(direct_body("bob", "second"), 2.0));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].body, "first");
    assert_eq!(state.messages[1].body, "second");
}

#[test]
fn direct_message_keeps_sender_attribution() {
    let entry = ChatMessage::from_event(direct_body("alice", "hello"), 5.0);
    assert_eq!(entry.sender_name.as_deref(), Some("alice"));
    assert_eq!(entry.body, "hello");
    assert!(!entry.is_broadcast);
    assert_eq!(entry.received_at_ms, 5.0);
}

#[test]
fn broadcast_message_drops_sender_attribution() {
    // Some servers still name a sender on room-wide notices; the entry
    // must not attribute them.
    let body = MessageBody {
        name: Some("alice".to_owned()),
        message: "alice has entered the room".to_owned(),
        is_global: true,
    };
    let entry = ChatMessage::from_event(body, 0.0);
    assert_eq!(entry.sender_name, None);
    assert!(entry.is_broadcast);
}

#[test]
fn direct_message_without_name_renders_unattributed() {
    let body = MessageBody {
        name: None,
        message: "anonymous".to_owned(),
        is_global: false,
    };
    let entry = ChatMessage::from_event(body, 0.0);
    assert_eq!(entry.sender_name, None);
    assert!(!entry.is_broadcast);
}
