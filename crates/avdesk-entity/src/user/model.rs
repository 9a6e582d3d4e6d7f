//! Identity and credential models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// A user record from the identity catalog. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identity reference.
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Human-readable display name.
    pub display_name: String,
    /// User role.
    pub role: UserRole,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Login credentials submitted by the user.
#[derive(Clone, Deserialize)]
pub struct Credential {
    /// Login name.
    pub username: String,
    /// Plaintext secret.
    pub secret: String,
}

impl Credential {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_hides_secret() {
        let credential = Credential::new("bob", "wrong");
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("wrong"));
    }

    #[test]
    fn test_identity_serialization_skips_hash() {
        let identity = Identity {
            id: "u1".into(),
            username: "ana".into(),
            display_name: "Ana".into(),
            role: UserRole::Admin,
            password_hash: "$argon2id$...".into(),
        };
        let json = serde_json::to_value(&identity).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "admin");
    }
}
