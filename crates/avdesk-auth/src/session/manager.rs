//! Session lifecycle manager: restore, login, logout.

use std::sync::Arc;

use tracing::{info, warn};

use avdesk_core::config::SessionConfig;
use avdesk_core::result::AppResult;
use avdesk_entity::session::Session;
use avdesk_entity::user::Credential;

use crate::error::AuthError;
use crate::identity::IdentityStore;

use super::store::{SessionStore, StoredSession};

/// Sole custodian of "who is logged in".
///
/// Every durable session mutation goes through [`login`](Self::login) or
/// [`logout`](Self::logout); [`restore_session`](Self::restore_session) only
/// reads. Construction requires an initialized [`IdentityStore`], so a
/// restore can never run ahead of identity loading.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// The read-only identity catalog.
    identities: Arc<IdentityStore>,
    /// Durable session slot.
    store: SessionStore,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionManager {
    /// Creates a session manager.
    pub fn new(identities: Arc<IdentityStore>, store: SessionStore, config: SessionConfig) -> Self {
        Self {
            identities,
            store,
            config,
        }
    }

    /// Returns the session persisted by a previous run, if it is usable.
    ///
    /// Missing, unreadable, malformed, or unrecognized-role records all
    /// yield `None`. Storage is never modified.
    pub async fn restore_session(&self) -> Option<Session> {
        let raw = match self.store.read().await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No stored session");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Session storage unreadable, treating as logged out");
                return None;
            }
        };

        let session = match SessionStore::decode(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Discarding corrupt stored session");
                return None;
            }
        };

        if self.config.verify_identity_on_restore {
            match self.identities.find_by_id(session.identity_id()) {
                Some(identity) if identity.role == session.role() => {}
                Some(identity) => {
                    warn!(
                        identity = %session.identity_id(),
                        stored_role = %session.role(),
                        current_role = %identity.role,
                        "Stored session role no longer matches identity"
                    );
                    return None;
                }
                None => {
                    warn!(
                        identity = %session.identity_id(),
                        "Stored session references unknown identity"
                    );
                    return None;
                }
            }
        }

        info!(
            identity = %session.identity_id(),
            role = %session.role(),
            "Restored session"
        );
        Some(session)
    }

    /// Verifies a credential and persists the resulting session.
    ///
    /// Any existing stored session is overwritten. On
    /// [`AuthError::InvalidCredentials`] nothing is written.
    pub async fn login(&self, credential: &Credential) -> Result<Session, AuthError> {
        let Some(identity) = self.identities.authenticate(credential)? else {
            warn!(username = %credential.username, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session = Session::for_identity(&identity)?;
        self.store.save(&session).await?;

        info!(
            identity = %identity.id,
            role = %identity.role,
            "Login successful"
        );
        Ok(session)
    }

    /// Removes any stored session. Idempotent.
    pub async fn logout(&self) -> AppResult<()> {
        self.store.clear().await?;
        info!("Stored session cleared");
        Ok(())
    }

    /// Reports what the slot holds without adopting or changing it.
    ///
    /// Unlike [`restore_session`](Self::restore_session), read failures and
    /// decode errors are surfaced.
    pub async fn inspect(&self) -> AppResult<StoredSession> {
        Ok(match self.store.read().await? {
            None => StoredSession::Empty,
            Some(raw) => match SessionStore::decode(&raw) {
                Ok(session) => StoredSession::Valid(session),
                Err(e) => StoredSession::Corrupt(e),
            },
        })
    }

    /// The identity catalog backing this manager.
    pub fn identities(&self) -> &IdentityStore {
        &self.identities
    }
}
