//! Status bar showing connection state and the active room code.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use crate::state::session::{ConnectionStatus, SessionState};

pub(crate) fn connection_status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "status-bar__dot--disconnected",
        ConnectionStatus::Connecting => "status-bar__dot--connecting",
        ConnectionStatus::Connected => "status-bar__dot--connected",
    }
}

pub(crate) fn connection_status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "Offline",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Connected => "Live",
    }
}

/// Bar across the top of the room page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let dot_class = move || {
        format!(
            "status-bar__dot {}",
            connection_status_class(session.get().connection_status)
        )
    };
    let label = move || connection_status_label(session.get().connection_status);
    let room = move || session.get().room_code.unwrap_or_default();

    view! {
        <header class="status-bar">
            <span class="status-bar__room">"Room " {room}</span>
            <span class="status-bar__connection">
                <span class=dot_class></span>
                {label}
            </span>
        </header>
    }
}
