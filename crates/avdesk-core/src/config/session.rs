//! Session restore configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// When enabled, a restored session must still reference an identity
    /// present in the identity store with the same role; otherwise it is
    /// discarded as if no session were stored.
    #[serde(default)]
    pub verify_identity_on_restore: bool,
}
