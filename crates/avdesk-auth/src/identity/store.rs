//! The read-only identity catalog.

use std::collections::HashMap;

use tracing::{debug, info};

use avdesk_core::config::{IdentityConfig, SeedUser};
use avdesk_core::error::AppError;
use avdesk_core::result::AppResult;
use avdesk_entity::user::{Credential, Identity, UserRole};

use crate::password::PasswordHasher;

/// Secret hashed at startup and verified on unknown usernames.
const DECOY_SECRET: &str = "avdesk-decoy-secret";

/// Durable catalog of user records, looked up by credential.
///
/// The only way to obtain a store is [`IdentityStore::initialize`], so any
/// `IdentityStore` value is fully populated.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    /// Identity id → record.
    by_id: HashMap<String, Identity>,
    /// Lowercased username → identity id.
    by_username: HashMap<String, String>,
    /// Hasher used to verify secrets.
    hasher: PasswordHasher,
    /// Hash checked when the username is unknown, so both misses cost the
    /// same Argon2 work.
    decoy_hash: String,
}

impl IdentityStore {
    /// Builds the catalog from seed configuration.
    ///
    /// Plaintext seed passwords are hashed here. Fails on unknown roles,
    /// duplicate ids or usernames, empty names, and seeds that do not carry
    /// exactly one of `password` / `password_hash`.
    pub fn initialize(config: &IdentityConfig, hasher: PasswordHasher) -> AppResult<Self> {
        let decoy_hash = hasher.hash_password(DECOY_SECRET)?;
        let mut store = Self {
            by_id: HashMap::with_capacity(config.users.len()),
            by_username: HashMap::with_capacity(config.users.len()),
            hasher,
            decoy_hash,
        };

        for seed in &config.users {
            let identity = store.identity_from_seed(seed)?;
            store.insert(identity)?;
        }

        info!(identities = store.len(), "Identity store initialized");
        Ok(store)
    }

    fn identity_from_seed(&self, seed: &SeedUser) -> AppResult<Identity> {
        if seed.id.trim().is_empty() {
            return Err(AppError::validation("Seed user has an empty id"));
        }
        if seed.username.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Seed user '{}' has an empty username",
                seed.id
            )));
        }
        if seed.display_name.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Seed user '{}' has an empty display name",
                seed.id
            )));
        }

        let role: UserRole = seed.role.parse()?;

        let password_hash = match (&seed.password, &seed.password_hash) {
            (Some(plain), None) => self.hasher.hash_password(plain)?,
            (None, Some(hash)) => {
                self.hasher.validate_hash(hash)?;
                hash.clone()
            }
            (Some(_), Some(_)) => {
                return Err(AppError::validation(format!(
                    "Seed user '{}' sets both password and password_hash",
                    seed.id
                )));
            }
            (None, None) => {
                return Err(AppError::validation(format!(
                    "Seed user '{}' has no password or password_hash",
                    seed.id
                )));
            }
        };

        Ok(Identity {
            id: seed.id.clone(),
            username: seed.username.clone(),
            display_name: seed.display_name.clone(),
            role,
            password_hash,
        })
    }

    fn insert(&mut self, identity: Identity) -> AppResult<()> {
        let username_key = identity.username.to_lowercase();

        if self.by_id.contains_key(&identity.id) {
            return Err(AppError::conflict(format!(
                "Duplicate identity id '{}'",
                identity.id
            )));
        }
        if self.by_username.contains_key(&username_key) {
            return Err(AppError::conflict(format!(
                "Duplicate username '{}'",
                identity.username
            )));
        }

        debug!(identity = %identity.id, role = %identity.role, "Loaded identity");
        self.by_username.insert(username_key, identity.id.clone());
        self.by_id.insert(identity.id.clone(), identity);
        Ok(())
    }

    /// Looks up the record matching a credential.
    ///
    /// Returns `Ok(None)` for an unknown username or a wrong secret.
    pub fn authenticate(&self, credential: &Credential) -> AppResult<Option<Identity>> {
        let Some(identity) = self.find_by_username(&credential.username) else {
            self.hasher
                .verify_password(&credential.secret, &self.decoy_hash)?;
            return Ok(None);
        };

        if self
            .hasher
            .verify_password(&credential.secret, &identity.password_hash)?
        {
            Ok(Some(identity.clone()))
        } else {
            Ok(None)
        }
    }

    /// Finds an identity by its reference.
    pub fn find_by_id(&self, id: &str) -> Option<&Identity> {
        self.by_id.get(id)
    }

    /// Finds an identity by username (case-insensitive).
    pub fn find_by_username(&self, username: &str) -> Option<&Identity> {
        self.by_username
            .get(&username.trim().to_lowercase())
            .and_then(|id| self.by_id.get(id))
    }

    /// All identities, ordered by id.
    pub fn identities(&self) -> Vec<&Identity> {
        let mut all: Vec<&Identity> = self.by_id.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Number of identities.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
