//! The identity catalog.

pub mod store;

pub use store::IdentityStore;
