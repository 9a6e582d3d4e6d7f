//! The contract between the shell and renderable views.

use std::collections::HashMap;

use async_trait::async_trait;

use avdesk_auth::session::SessionManager;
use avdesk_core::error::AppError;
use avdesk_core::result::AppResult;
use avdesk_entity::session::Session;
use avdesk_entity::user::UserRole;
use avdesk_entity::view::ViewId;

/// Inputs handed to a view for one render.
#[derive(Debug, Clone, Copy)]
pub enum ViewContext<'a> {
    /// The login view authenticates through the session manager.
    Login {
        /// Session manager used to verify credentials.
        sessions: &'a SessionManager,
    },
    /// Dashboards receive who is logged in.
    Dashboard {
        /// Name of the logged-in user.
        display_name: &'a str,
        /// Role of the logged-in user.
        role: UserRole,
    },
}

/// What a view asks the shell to do after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// The login view obtained a session.
    LoggedIn(Session),
    /// A dashboard requested logout.
    Logout,
    /// Render the same screen again.
    Stay,
    /// Leave the application.
    Quit,
}

/// A renderable screen.
#[async_trait]
pub trait View: Send {
    /// Which screen this is.
    fn id(&self) -> ViewId;

    /// Renders once and reports the user's intent.
    async fn render(&mut self, ctx: ViewContext<'_>) -> AppResult<ViewAction>;
}

/// Holds one view per [`ViewId`].
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<ViewId, Box<dyn View>>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view under its own id, replacing any previous one.
    pub fn register(&mut self, view: impl View + 'static) -> &mut Self {
        self.views.insert(view.id(), Box::new(view));
        self
    }

    /// Returns the view for an id.
    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut Box<dyn View>> {
        self.views.get_mut(&id)
    }

    /// Fails unless every view id has a registered view.
    pub fn ensure_complete(&self) -> AppResult<()> {
        let missing: Vec<&str> = ViewId::ALL
            .iter()
            .filter(|id| !self.views.contains_key(*id))
            .map(ViewId::as_str)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::configuration(format!(
                "No view registered for: {}",
                missing.join(", ")
            )))
        }
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.views.keys().map(ViewId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ViewRegistry").field("views", &ids).finish()
    }
}
