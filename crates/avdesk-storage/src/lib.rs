//! # avdesk-storage
//!
//! Durable key-value backends for AVDesk. Supports two modes:
//!
//! - **file**: one file per key under a data directory, written atomically
//! - **memory**: process-lifetime map backed by [dashmap](https://crates.io/crates/dashmap)
//!
//! The backend is selected at runtime based on configuration.

#[cfg(feature = "file")]
pub mod file;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use provider::StoreManager;
