//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use avdesk_auth::identity::IdentityStore;
use avdesk_auth::password::PasswordHasher;
use avdesk_auth::router::RoleRouter;
use avdesk_auth::session::{SessionManager, SessionStore};
use avdesk_core::config::{IdentityConfig, SeedUser, SessionConfig};
use avdesk_core::traits::storage::KeyValueStore;
use avdesk_shell::AppShell;
use avdesk_storage::keys;
use avdesk_storage::memory::MemoryStore;

/// Test application context: one identity catalog and one durable slot.
pub struct TestApp {
    /// Durable backend shared by every "process" built from this app
    pub backend: Arc<dyn KeyValueStore>,
    /// Identity catalog
    pub identities: Arc<IdentityStore>,
    /// Session options
    pub config: SessionConfig,
}

impl TestApp {
    /// Create a test app over an empty in-memory slot
    pub fn new() -> Self {
        Self::with_backend(Arc::new(MemoryStore::new()))
    }

    /// Create a test app over the given backend
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        let hasher = PasswordHasher::with_params(1024, 1, 1).expect("Failed to build hasher");
        let identities = IdentityStore::initialize(&seed_catalog(), hasher)
            .expect("Failed to init identity store");

        Self {
            backend,
            identities: Arc::new(identities),
            config: SessionConfig::default(),
        }
    }

    /// A fresh session manager, as a new process would build one
    pub fn sessions(&self) -> SessionManager {
        SessionManager::new(
            Arc::clone(&self.identities),
            SessionStore::new(Arc::clone(&self.backend)),
            self.config.clone(),
        )
    }

    /// A fresh uninitialized shell
    pub fn shell(&self) -> AppShell {
        AppShell::new(RoleRouter::new())
    }

    /// A shell that has completed startup
    pub async fn started_shell(&self) -> AppShell {
        let mut shell = self.shell();
        shell
            .start(self.sessions())
            .await
            .expect("Failed to start shell");
        shell
    }

    /// Write raw content into the session slot
    pub async fn preload(&self, raw: &str) {
        self.backend
            .put(&keys::session_slot(), raw)
            .await
            .expect("Failed to preload session");
    }

    /// Raw content of the session slot
    pub async fn stored(&self) -> Option<String> {
        self.backend
            .get(&keys::session_slot())
            .await
            .expect("Failed to read session slot")
    }
}

fn seed(id: &str, username: &str, name: &str, role: &str, password: &str) -> SeedUser {
    SeedUser {
        id: id.to_string(),
        username: username.to_string(),
        display_name: name.to_string(),
        role: role.to_string(),
        password: Some(password.to_string()),
        password_hash: None,
    }
}

/// One identity per role
pub fn seed_catalog() -> IdentityConfig {
    IdentityConfig {
        users: vec![
            seed("u1", "ana", "Ana", "admin", "pw-ana"),
            seed("u2", "bob", "Bob", "authorized", "pw-bob"),
            seed("u3", "cho", "Cho", "consultant", "pw-cho"),
            seed("u4", "dara", "Dara", "consultant-teacher", "pw-dara"),
            seed("u5", "eli", "Eli", "consultant-student", "pw-eli"),
        ],
    }
}
