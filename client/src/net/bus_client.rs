//! WebSocket bus client for the realtime chat connection.
//!
//! Manages the websocket lifecycle: connection, reconnection with
//! exponential backoff, inbound event dispatch, and the outbound sender
//! channel. It is the only bridge between the server's event bus and
//! the Leptos UI state.
//!
//! All websocket logic is gated behind `#[cfg(feature = "csr")]` since
//! it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Decode/transport failures are logged and absorbed so the realtime UX
//! recovers through the reconnect loop; a frame that fails to parse
//! never tears down the connection.

#[cfg(test)]
#[path = "bus_client_test.rs"]
mod bus_client_test;

#[cfg(feature = "csr")]
use events::{ClientEvent, ServerEvent};

#[cfg(feature = "csr")]
use crate::state::chat::{ChatMessage, ChatState};
#[cfg(feature = "csr")]
use crate::state::roster::RosterState;
#[cfg(feature = "csr")]
use crate::state::session::{ConnectionStatus, SessionState};
#[cfg(feature = "csr")]
use leptos::prelude::GetUntracked;
#[cfg(feature = "csr")]
use leptos::prelude::Update;

/// Scheme for the bus socket given the page URL.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn ws_scheme(page_href: &str) -> &'static str {
    if page_href.starts_with("https") { "wss" } else { "ws" }
}

/// Send an event to the server via the shared sender channel.
///
/// Returns `false` if the channel is closed (no active connection).
#[cfg(feature = "csr")]
pub fn send_event(
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    event: &ClientEvent,
) -> bool {
    tx.unbounded_send(events::encode_event(event)).is_ok()
}

/// Spawn the websocket bus client lifecycle as a local async task.
///
/// This connects to the server, dispatches incoming events into state,
/// and reconnects on disconnect with exponential backoff.
#[cfg(feature = "csr")]
pub fn spawn_bus_client(
    session: leptos::prelude::RwSignal<SessionState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    roster: leptos::prelude::RwSignal<RosterState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(bus_client_loop(session, chat, roster, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "csr")]
async fn bus_client_loop(
    session: leptos::prelude::RwSignal<SessionState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    roster: leptos::prelude::RwSignal<RosterState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        session.update(|s| s.connection_status = ConnectionStatus::Connecting);

        let Some(url) = bus_url(&session.get_untracked()) else {
            // No room identity to connect with; nothing to do.
            session.update(|s| s.connection_status = ConnectionStatus::Disconnected);
            return;
        };

        match connect_and_run(&url, session, chat, roster, &rx).await {
            Ok(()) => {
                leptos::logging::log!("bus disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("bus error: {e}");
            }
        }

        session.update(|s| s.connection_status = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Build the websocket URL from the page location and session identity.
#[cfg(feature = "csr")]
fn bus_url(session: &SessionState) -> Option<String> {
    let room = session.room_code.as_deref()?;
    let name = session.display_name.as_deref()?;

    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:8080".to_owned());

    let room_q = js_sys::encode_uri_component(room);
    let name_q = js_sys::encode_uri_component(name);
    Some(format!(
        "{}://{host}/ws?room={room_q}&name={name_q}",
        ws_scheme(&location)
    ))
}

/// Connect to the websocket and process messages until disconnect.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    session: leptos::prelude::RwSignal<SessionState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    roster: leptos::prelude::RwSignal<RosterState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.connection_status = ConnectionStatus::Connected);

    // Forward outgoing events from our channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(text) = rx_borrow.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch incoming events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match events::decode_event(&text) {
                    Ok(event) => dispatch_event(event, chat, roster),
                    Err(e) => {
                        leptos::logging::warn!("bus decode error: {e}");
                    }
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("bus recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch one inbound event into the appropriate state model.
#[cfg(feature = "csr")]
fn dispatch_event(
    event: ServerEvent,
    chat: leptos::prelude::RwSignal<ChatState>,
    roster: leptos::prelude::RwSignal<RosterState>,
) {
    match event {
        ServerEvent::Message(body) => {
            let received_at_ms = crate::util::clock::now_ms();
            chat.update(|c| c.push(ChatMessage::from_event(body, received_at_ms)));
        }
        ServerEvent::Connected(presence) => {
            roster.update(|r| {
                r.connect(&presence.name);
            });
        }
        ServerEvent::Disconnected(presence) => {
            roster.update(|r| {
                r.disconnect(&presence.name);
            });
        }
    }
}
