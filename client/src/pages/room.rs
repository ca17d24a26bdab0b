//! Room page — the chat widget shell.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between URL room
//! identity and the websocket bus client. It binds the route's room
//! code into session state, requires a stored display name (bouncing
//! back to the home page otherwise), and spawns the bus client once.

use leptos::prelude::*;

use crate::components::message_form::MessageForm;
use crate::components::message_list::MessageList;
use crate::components::roster_panel::RosterPanel;
use crate::components::status_bar::StatusBar;

#[cfg(feature = "csr")]
use crate::app::BusSender;
#[cfg(feature = "csr")]
use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::state::roster::RosterState;
#[cfg(feature = "csr")]
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_params_map;

/// The chat room: status bar, message list, send form, and roster.
#[component]
pub fn RoomPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let session = expect_context::<RwSignal<SessionState>>();
        let chat = expect_context::<RwSignal<ChatState>>();
        let roster = expect_context::<RwSignal<RosterState>>();
        let sender = expect_context::<RwSignal<BusSender>>();
        let params = use_params_map();

        Effect::new(move || {
            let Some(room) = params.read().get("code") else {
                return;
            };
            if session.get_untracked().room_code.as_deref() == Some(room.as_str()) {
                // Already joined to this room on this page load.
                return;
            }

            let Some(name) = crate::util::display_name::read_stored() else {
                // No identity yet: back to the front door.
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
                return;
            };

            session.update(|s| {
                s.room_code = Some(room);
                s.display_name = Some(name);
            });

            let tx = crate::net::bus_client::spawn_bus_client(session, chat, roster);
            sender.set(BusSender::new(tx));
        });
    }

    view! {
        <div class="room-page">
            <StatusBar/>
            <main class="room-page__main">
                <MessageList/>
                <MessageForm/>
            </main>
            <RosterPanel/>
        </div>
    }
}
