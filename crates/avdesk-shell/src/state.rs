//! Shell state machine states.

use avdesk_entity::session::Session;
use avdesk_entity::user::UserRole;
use avdesk_entity::view::ViewId;

/// What the shell knows about the current run.
///
/// Role, name, and authentication status are all read from this one
/// variant, so they cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellState {
    /// Identity store not ready yet; nothing but a loading indicator is shown.
    #[default]
    Uninitialized,
    /// Ready, nobody logged in.
    Unauthenticated,
    /// Ready, a session is active.
    Authenticated(Session),
}

impl ShellState {
    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether startup has completed.
    pub fn is_initialized(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// The current role, `None` when nobody is logged in.
    pub fn role(&self) -> Option<UserRole> {
        self.session().map(Session::role)
    }

    /// The current display name, `None` when nobody is logged in.
    pub fn display_name(&self) -> Option<&str> {
        self.session().map(Session::display_name)
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// What should be rendered right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Neutral loading indicator shown before startup completes.
    Loading,
    /// A login or dashboard view.
    Show(ViewId),
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_fields_follow_variant() {
        let state = ShellState::Unauthenticated;
        assert!(!state.is_authenticated());
        assert!(state.role().is_none());
        assert!(state.display_name().is_none());

        let session = Session::new("u1", UserRole::Admin, "Ana", Utc::now()).unwrap();
        let state = ShellState::Authenticated(session);
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(UserRole::Admin));
        assert_eq!(state.display_name(), Some("Ana"));
    }

    #[test]
    fn test_default_is_uninitialized() {
        assert!(!ShellState::default().is_initialized());
    }
}
