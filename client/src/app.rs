//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, room::RoomPage};
use crate::state::{chat::ChatState, roster::RosterState, session::SessionState};

/// Handle for emitting events onto the bus from any component.
///
/// Wraps the bus client's outbound channel. The default value has no
/// channel and drops every send; the room page swaps in a live handle
/// once the bus client is spawned.
#[derive(Clone, Default)]
pub struct BusSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl BusSender {
    #[cfg(feature = "csr")]
    pub(crate) fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Send one event, fire-and-forget.
    ///
    /// Returns `false` if there is no live connection channel.
    pub fn send(&self, event: &events::ClientEvent) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| crate::net::bus_client::send_event(tx, event))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = event;
            false
        }
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());
    let roster = RwSignal::new(RosterState::default());
    let sender = RwSignal::new(BusSender::default());

    provide_context(session);
    provide_context(chat);
    provide_context(roster);
    provide_context(sender);

    view! {
        <Title text="Parlor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("room"), ParamSegment("code")) view=RoomPage/>
            </Routes>
        </Router>
    }
}
