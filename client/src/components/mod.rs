//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat widget surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod message_form;
pub mod message_list;
pub mod roster_panel;
pub mod status_bar;
