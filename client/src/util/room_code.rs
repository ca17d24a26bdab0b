//! Room-code generation and join-input normalization.
//!
//! Codes are six uppercase ASCII letters. Generation is client-side and
//! UUID-seeded; collision checks belong to the server that owns the
//! room registry.

#[cfg(test)]
#[path = "room_code_test.rs"]
mod room_code_test;

use uuid::Uuid;

/// Length of generated room codes.
pub const CODE_LEN: usize = 6;

/// Generate a fresh room code.
#[must_use]
pub fn generate() -> String {
    from_uuid(Uuid::new_v4())
}

/// Map UUID bytes onto the room-code alphabet.
pub(crate) fn from_uuid(id: Uuid) -> String {
    id.as_bytes()
        .iter()
        .take(CODE_LEN)
        .map(|b| char::from(b'A' + b % 26))
        .collect()
}

/// Trim, validate, and uppercase a join-form room code.
///
/// Returns `None` for empty input or characters outside ASCII letters
/// and digits.
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(code.to_ascii_uppercase())
}
