//! # avdesk-core
//!
//! Core crate for AVDesk. Contains the unified error system, configuration
//! schemas, and the durable key-value storage trait.
//!
//! This crate has **no** internal dependencies on other AVDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
