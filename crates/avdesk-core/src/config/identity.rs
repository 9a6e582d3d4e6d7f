//! Identity catalog (seed data) configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seed catalog loaded into the identity store at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Seed user records.
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

/// A single seed user record.
///
/// Exactly one of `password` (hashed at startup) or `password_hash`
/// (an Argon2 PHC string) must be present.
#[derive(Clone, Serialize, Deserialize)]
pub struct SeedUser {
    /// Unique identity reference stored in sessions.
    pub id: String,
    /// Login name, matched case-insensitively.
    pub username: String,
    /// Name shown on dashboards.
    pub display_name: String,
    /// Role tag, e.g. `"admin"` or `"consultant-student"`.
    pub role: String,
    /// Plaintext secret.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    /// Pre-hashed secret.
    #[serde(default)]
    pub password_hash: Option<String>,
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("password_hash", &self.password_hash.is_some())
            .finish()
    }
}
