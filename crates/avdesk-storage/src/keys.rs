//! Storage key builders.

/// Prefix applied to all AVDesk storage keys.
const PREFIX: &str = "avdesk";

/// The single well-known slot holding the current session.
pub fn session_slot() -> String {
    format!("{PREFIX}:session:current")
}
