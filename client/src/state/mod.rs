//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `roster`, `session`) so individual
//! components can depend on small focused models. The DOM is a render
//! function of these models; nothing here touches the document.

pub mod chat;
pub mod roster;
pub mod session;
