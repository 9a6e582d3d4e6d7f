//! User domain entities.

pub mod model;
pub mod role;

pub use model::{Credential, Identity};
pub use role::UserRole;
