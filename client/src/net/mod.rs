//! Networking modules for the websocket event bus.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bus_client` owns the websocket lifecycle and translates inbound bus
//! events into state updates. The wire schema itself lives in the
//! `events` crate.

pub mod bus_client;
