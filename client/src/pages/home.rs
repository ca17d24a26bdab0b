//! Home page with the join/create room form.
//!
//! A display name is required either way; joining additionally needs a
//! room code, while creating generates a fresh one. The accepted name
//! is persisted so it survives the navigation into the room.

use leptos::prelude::*;

use crate::util::{display_name, room_code};

fn navigate_to_room(room: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&format!("/room/{room}"));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = room;
    }
}

/// Landing page: pick a name, then join or create a room.
#[component]
pub fn HomePage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let resolve_name = move || match display_name::normalize(&name.get()) {
        Some(accepted) => {
            error.set(String::new());
            Some(accepted)
        }
        None => {
            error.set("Please enter a valid name.".to_owned());
            None
        }
    };

    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(accepted) = resolve_name() else {
            return;
        };
        let Some(room) = room_code::normalize(&code.get()) else {
            error.set("Please enter a room code.".to_owned());
            return;
        };
        display_name::store(&accepted);
        navigate_to_room(&room);
    };

    let on_create = move |_| {
        let Some(accepted) = resolve_name() else {
            return;
        };
        display_name::store(&accepted);
        navigate_to_room(&room_code::generate());
    };

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Parlor"</h1>
                <p class="home-card__subtitle">"Join a room or start your own"</p>
                <form class="home-form" on:submit=on_join>
                    <input
                        class="home-input"
                        type="text"
                        maxlength="30"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="home-input home-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="ABCDEF"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev).to_ascii_uppercase())
                    />
                    <button class="home-button" type="submit">
                        "Join Room"
                    </button>
                    <button class="home-button" type="button" on:click=on_create>
                        "Create Room"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="home-message">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
