//! Authenticated session model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use avdesk_core::AppError;

use crate::user::{Identity, UserRole};

/// The fact that an identity is currently authenticated.
///
/// A `Session` always carries a non-empty identity reference and display
/// name; the constructors reject anything else, so holding a `Session` is
/// proof of a well-formed authenticated actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    identity_id: String,
    role: UserRole,
    display_name: String,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Builds a session, validating the identity reference and display name.
    pub fn new(
        identity_id: impl Into<String>,
        role: UserRole,
        display_name: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let identity_id = identity_id.into();
        let display_name = display_name.into();

        if identity_id.trim().is_empty() {
            return Err(AppError::validation("Session identity reference is empty"));
        }
        if display_name.trim().is_empty() {
            return Err(AppError::validation("Session display name is empty"));
        }

        Ok(Self {
            identity_id,
            role,
            display_name,
            started_at,
        })
    }

    /// Starts a session for a verified identity.
    pub fn for_identity(identity: &Identity) -> Result<Self, AppError> {
        Self::new(
            identity.id.clone(),
            identity.role,
            identity.display_name.clone(),
            Utc::now(),
        )
    }

    /// The identity reference this session belongs to.
    pub fn identity_id(&self) -> &str {
        &self.identity_id
    }

    /// The authenticated role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// The name shown on dashboards.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// When the session was established.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
