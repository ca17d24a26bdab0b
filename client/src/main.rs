//! # Parlor client
//!
//! Leptos + WASM frontend for the realtime chat room. A home page picks
//! a display name and a room; the room page renders the live message
//! list, the membership roster, and the send form over a websocket
//! event bus.
//!
//! This crate contains pages, components, application state, and the
//! websocket bus client. The wire schema lives in the `events` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(app::App);
    }
}
