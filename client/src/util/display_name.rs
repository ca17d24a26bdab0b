//! Display-name rules and persistence.
//!
//! Names are at most 30 characters drawn from word characters, dashes,
//! dots, and whitespace. The accepted name is persisted to
//! `localStorage` so it survives the navigation from the home page into
//! a room. Persistence is best-effort browser-only behavior.

#[cfg(test)]
#[path = "display_name_test.rs"]
mod display_name_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "parlor_name";

/// Maximum accepted display-name length, in characters.
pub const MAX_LEN: usize = 30;

/// Trim and validate raw name input.
///
/// Returns `None` when the trimmed name is empty, too long, or contains
/// characters outside the accepted set.
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > MAX_LEN {
        return None;
    }
    if !name.chars().all(is_allowed_char) {
        return None;
    }
    Some(name.to_owned())
}

fn is_allowed_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-' | '.')
}

/// Read the stored display name, if any.
#[must_use]
pub fn read_stored() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|name| !name.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the display name for the next page load.
pub fn store(name: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, name);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
    }
}
