//! The application shell state machine.

use tracing::{error, info, warn};

use avdesk_auth::error::AuthError;
use avdesk_auth::router::RoleRouter;
use avdesk_auth::session::SessionManager;
use avdesk_core::error::AppError;
use avdesk_core::result::AppResult;
use avdesk_entity::session::Session;
use avdesk_entity::user::Credential;
use avdesk_entity::view::ViewId;

use crate::state::{Screen, ShellState};
use crate::view::{ViewAction, ViewContext, ViewRegistry};

/// Single source of truth for what is on screen.
///
/// The shell holds the in-memory session mirror and never touches durable
/// storage itself: every durable change goes through the [`SessionManager`].
#[derive(Debug)]
pub struct AppShell {
    /// Role → view routing.
    router: RoleRouter,
    /// Present once startup has run.
    sessions: Option<SessionManager>,
    /// Current state.
    state: ShellState,
}

impl AppShell {
    /// Creates an uninitialized shell.
    pub fn new(router: RoleRouter) -> Self {
        Self {
            router,
            sessions: None,
            state: ShellState::Uninitialized,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// What should be rendered now.
    pub fn screen(&self) -> Screen {
        match &self.state {
            ShellState::Uninitialized => Screen::Loading,
            state => Screen::Show(self.router.select_view(state.role())),
        }
    }

    /// Leaves `Uninitialized` by consulting the stored session.
    ///
    /// The session manager can only be built over an initialized identity
    /// store, so receiving one here means identity loading has completed.
    /// Runs once; a second call fails and changes nothing.
    pub async fn start(&mut self, sessions: SessionManager) -> AppResult<ViewId> {
        if self.state.is_initialized() {
            return Err(AppError::conflict("Application shell already started"));
        }

        info!("Restoring previous session");
        let restored = sessions.restore_session().await;
        self.sessions = Some(sessions);
        self.state = match restored {
            Some(session) => {
                info!(name = %session.display_name(), role = %session.role(), "Active session detected");
                ShellState::Authenticated(session)
            }
            None => ShellState::Unauthenticated,
        };

        Ok(self.current_view())
    }

    /// Adopts a session produced by a successful login.
    ///
    /// Replaces any session already mirrored.
    pub fn on_login(&mut self, session: Session) -> AppResult<ViewId> {
        self.require_started()?;

        info!(name = %session.display_name(), role = %session.role(), "Login adopted");
        self.state = ShellState::Authenticated(session);
        Ok(self.current_view())
    }

    /// Verifies a credential through the session manager, then adopts the
    /// session. On failure the state is unchanged.
    pub async fn login(&mut self, credential: &Credential) -> Result<ViewId, AuthError> {
        let sessions = self.require_started()?;
        let session = sessions.login(credential).await?;
        Ok(self.on_login(session)?)
    }

    /// Clears the durable session and the in-memory mirror.
    ///
    /// The mirror is cleared whatever the previous role, even if the durable
    /// removal fails; that failure is logged.
    pub async fn on_logout(&mut self) -> AppResult<ViewId> {
        let sessions = self.require_started()?;

        info!("Logging out");
        if let Err(e) = sessions.logout().await {
            error!(error = %e, "Failed to clear stored session during logout");
        }
        self.state = ShellState::Unauthenticated;
        Ok(self.current_view())
    }

    /// Runs the render loop until a view asks to quit.
    ///
    /// Only terminal input failures end the loop with an error. Any other
    /// view failure lands on the Login view.
    pub async fn run(&mut self, views: &mut ViewRegistry) -> AppResult<()> {
        views.ensure_complete()?;

        loop {
            let view_id = match self.screen() {
                Screen::Loading => {
                    return Err(AppError::session("Application shell has not been started"));
                }
                Screen::Show(view_id) => view_id,
            };

            let view = views.get_mut(view_id).ok_or_else(|| {
                AppError::configuration(format!("No view registered for {view_id}"))
            })?;

            let outcome = {
                let ctx = self.context()?;
                view.render(ctx).await
            };

            let action = match outcome {
                Ok(action) => action,
                Err(e) if e.is_input() => {
                    // Stored session is left alone so the next launch restores it.
                    error!(view = %view_id, error = %e, "Terminal input failed");
                    return Err(e);
                }
                Err(e) if self.state.is_authenticated() => {
                    error!(view = %view_id, error = %e, "Dashboard failed, returning to login");
                    self.on_logout().await?;
                    continue;
                }
                Err(e) => {
                    error!(view = %view_id, error = %e, "Login failed, prompting again");
                    continue;
                }
            };

            match action {
                ViewAction::LoggedIn(session) if !self.state.is_authenticated() => {
                    self.on_login(session)?;
                }
                ViewAction::Logout if self.state.is_authenticated() => {
                    self.on_logout().await?;
                }
                ViewAction::Stay => {}
                ViewAction::Quit => {
                    info!("Leaving application");
                    return Ok(());
                }
                other => {
                    warn!(view = %view_id, action = ?other, "Ignoring action not valid for current state");
                }
            }
        }
    }

    fn context(&self) -> AppResult<ViewContext<'_>> {
        match &self.state {
            ShellState::Authenticated(session) => Ok(ViewContext::Dashboard {
                display_name: session.display_name(),
                role: session.role(),
            }),
            _ => Ok(ViewContext::Login {
                sessions: self.require_started()?,
            }),
        }
    }

    fn current_view(&self) -> ViewId {
        self.router.select_view(self.state.role())
    }

    fn require_started(&self) -> AppResult<&SessionManager> {
        self.sessions
            .as_ref()
            .ok_or_else(|| AppError::session("Application shell has not been started"))
    }
}
