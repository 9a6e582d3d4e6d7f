//! Core traits defined in `avdesk-core` and implemented by other crates.

pub mod storage;

pub use storage::KeyValueStore;
