//! # avdesk-entity
//!
//! Domain entity models shared by every AVDesk crate: identities and their
//! roles, authenticated sessions, and the closed set of application views.

pub mod session;
pub mod user;
pub mod view;

pub use session::Session;
pub use user::{Credential, Identity, UserRole};
pub use view::ViewId;
