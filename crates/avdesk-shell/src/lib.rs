//! # avdesk-shell
//!
//! The application shell decides what is on screen. It sequences startup
//! (identity store ready, then session restore), mirrors the session for the
//! current run, and dispatches to exactly one view chosen by the role router.

pub mod shell;
pub mod state;
pub mod view;

pub use shell::AppShell;
pub use state::{Screen, ShellState};
pub use view::{View, ViewAction, ViewContext, ViewRegistry};
