use super::*;

fn sample_message_frame() -> String {
    serde_json::json!({
        "event": "message",
        "data": {
            "name": "alice",
            "message": "hello there",
            "is_global": false
        }
    })
    .to_string()
}

#[test]
fn decode_message_event_with_sender() {
    let event = decode_event(&sample_message_frame()).expect("decode should succeed");
    let ServerEvent::Message(body) = event else {
        panic!("expected message event");
    };
    assert_eq!(body.name.as_deref(), Some("alice"));
    assert_eq!(body.message, "hello there");
    assert!(!body.is_global);
}

#[test]
fn decode_message_event_defaults_missing_fields() {
    // Room-wide notices omit both the sender name and, on some servers,
    // the is_global flag entirely.
    let text = serde_json::json!({
        "event": "message",
        "data": { "message": "bob has entered the room" }
    })
    .to_string();
    let event = decode_event(&text).expect("decode should succeed");
    let ServerEvent::Message(body) = event else {
        panic!("expected message event");
    };
    assert_eq!(body.name, None);
    assert!(!body.is_global);
}

#[test]
fn decode_connected_and_disconnected_events() {
    let joined = decode_event(r#"{"event":"connected","data":{"name":"bob"}}"#)
        .expect("decode should succeed");
    assert_eq!(
        joined,
        ServerEvent::Connected(Presence { name: "bob".to_owned() })
    );

    let left = decode_event(r#"{"event":"disconnected","data":{"name":"bob"}}"#)
        .expect("decode should succeed");
    assert_eq!(
        left,
        ServerEvent::Disconnected(Presence { name: "bob".to_owned() })
    );
}

#[test]
fn decode_rejects_unknown_event_name() {
    let err = decode_event(r#"{"event":"typing","data":{"name":"bob"}}"#)
        .expect_err("event name should be rejected");
    assert!(matches!(err, CodecError::UnknownEvent(name) if name == "typing"));
}

#[test]
fn decode_rejects_malformed_text() {
    let err = decode_event("not json at all").expect_err("text should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn decode_rejects_payload_with_wrong_shape() {
    // `connected` requires a name.
    let err = decode_event(r#"{"event":"connected","data":{}}"#)
        .expect_err("payload should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn encode_outbound_message_matches_wire_shape() {
    let event = ClientEvent::Message(OutgoingMessage { data: "hi room".to_owned() });
    let text = encode_event(&event);
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["event"], "message");
    assert_eq!(value["data"]["data"], "hi room");
}

#[test]
fn inbound_message_payload_round_trips_through_serde() {
    let body = MessageBody {
        name: Some("carol".to_owned()),
        message: "x".to_owned(),
        is_global: true,
    };
    let text = serde_json::to_string(&body).expect("serialize");
    let back: MessageBody = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, body);
}
