//! Durable key-value storage trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for durable key-value backends (in-memory, file).
///
/// Values are opaque strings (JSON in practice). Each operation is a single
/// suspendable step: a concurrent reader never observes a partially applied
/// `put` or `remove`.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Returns the backend name (e.g. `"memory"`, `"file"`).
    fn provider_type(&self) -> &str;

    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value, replacing any previous value for the key.
    async fn put(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Check that the backend is usable.
    async fn health_check(&self) -> AppResult<bool>;
}
