//! The durable session slot and its record format.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use avdesk_core::result::AppResult;
use avdesk_core::traits::storage::KeyValueStore;
use avdesk_entity::session::Session;
use avdesk_entity::user::UserRole;
use avdesk_storage::keys;

/// On-storage shape of the current session.
#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    identity: String,
    role: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
}

/// Reasons a stored session record is rejected.
#[derive(Debug, Error)]
pub enum SessionDecodeError {
    /// Not JSON, or required fields missing.
    #[error("session record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Role tag outside the closed role set.
    #[error("session record has unrecognized role '{0}'")]
    UnrecognizedRole(String),
    /// Identity reference is empty.
    #[error("session record has no identity reference")]
    MissingIdentity,
    /// Display name is empty.
    #[error("session record has an empty display name")]
    EmptyDisplayName,
}

/// What the session slot currently holds.
#[derive(Debug)]
pub enum StoredSession {
    /// Nothing is stored.
    Empty,
    /// A record that decodes to a session.
    Valid(Session),
    /// A record that restore would ignore.
    Corrupt(SessionDecodeError),
}

/// Reads and writes the single well-known session slot.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Durable key-value backend.
    backend: Arc<dyn KeyValueStore>,
    /// Slot key inside the backend.
    key: String,
}

impl SessionStore {
    /// Creates a session store over the given backend.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            key: keys::session_slot(),
        }
    }

    /// Reads the raw slot content, if any.
    pub(crate) async fn read(&self) -> AppResult<Option<String>> {
        self.backend.get(&self.key).await
    }

    /// Writes a session into the slot, replacing any previous one.
    pub(crate) async fn save(&self, session: &Session) -> AppResult<()> {
        let raw = Self::encode(session)?;
        self.backend.put(&self.key, &raw).await
    }

    /// Empties the slot. Succeeds when the slot is already empty.
    pub(crate) async fn clear(&self) -> AppResult<()> {
        self.backend.remove(&self.key).await
    }

    /// Serializes a session to its record form.
    pub fn encode(session: &Session) -> AppResult<String> {
        let record = SessionRecord {
            identity: session.identity_id().to_string(),
            role: session.role().as_str().to_string(),
            name: session.display_name().to_string(),
            started_at: Some(session.started_at()),
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Parses and validates a stored record.
    ///
    /// A record without `started_at` is stamped with the current time.
    pub fn decode(raw: &str) -> Result<Session, SessionDecodeError> {
        let record: SessionRecord = serde_json::from_str(raw)?;

        if record.identity.trim().is_empty() {
            return Err(SessionDecodeError::MissingIdentity);
        }
        if record.name.trim().is_empty() {
            return Err(SessionDecodeError::EmptyDisplayName);
        }
        let role: UserRole = record
            .role
            .parse()
            .map_err(|_| SessionDecodeError::UnrecognizedRole(record.role.clone()))?;

        Session::new(
            record.identity,
            role,
            record.name,
            record.started_at.unwrap_or_else(Utc::now),
        )
        .map_err(|_| SessionDecodeError::EmptyDisplayName)
    }
}
