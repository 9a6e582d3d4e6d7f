//! # avdesk-auth
//!
//! Authentication, session custody, and role routing for AVDesk.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `identity`: The read-only identity catalog built from seed data
//! - `session`: Session lifecycle (restore, login, logout) over the durable session slot
//! - `router`: Pure mapping from role to the one view that should be shown

pub mod error;
pub mod identity;
pub mod password;
pub mod router;
pub mod session;

pub use error::AuthError;
pub use identity::IdentityStore;
pub use password::PasswordHasher;
pub use router::{RoleRouter, ViewTable};
pub use session::{SessionManager, SessionStore};
