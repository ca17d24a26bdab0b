//! Membership roster for the active room.
//!
//! DESIGN
//! ======
//! Members are keyed by display name alone; the member count is derived
//! from the set size and never stored separately, so the two cannot
//! drift. Connect/disconnect are idempotent, which makes the roster
//! tolerant of duplicate or out-of-order delivery for the same name.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::collections::BTreeSet;

/// The set of currently connected member names, ordered for display.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    members: BTreeSet<String>,
}

impl RosterState {
    /// Record a member joining. No-op if the name is already present;
    /// returns whether the roster changed.
    pub fn connect(&mut self, name: &str) -> bool {
        if self.members.contains(name) {
            return false;
        }
        self.members.insert(name.to_owned())
    }

    /// Record a member leaving. No-op if the name is absent; returns
    /// whether the roster changed.
    pub fn disconnect(&mut self, name: &str) -> bool {
        self.members.remove(name)
    }

    /// Number of currently connected members. Always equal to the
    /// number of roster entries.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether a member with this name is currently connected.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Member names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}
