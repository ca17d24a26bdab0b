use super::*;

#[test]
fn ws_scheme_follows_page_scheme() {
    assert_eq!(ws_scheme("https://chat.example/room/ABCDEF"), "wss");
    assert_eq!(ws_scheme("http://localhost:8080/"), "ws");
}

#[test]
fn ws_scheme_defaults_to_plain_for_unknown_pages() {
    assert_eq!(ws_scheme(""), "ws");
}
