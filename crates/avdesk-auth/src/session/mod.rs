//! Session lifecycle management: restore, login, and logout.

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{SessionDecodeError, SessionStore, StoredSession};
