//! Terminal login prompt.

use async_trait::async_trait;
use dialoguer::{Input, Password};
use tracing::warn;

use avdesk_auth::error::AuthError;
use avdesk_core::error::AppError;
use avdesk_core::result::AppResult;
use avdesk_entity::user::Credential;
use avdesk_entity::view::ViewId;
use avdesk_shell::{View, ViewAction, ViewContext};

use super::input_error;

/// Prompts for credentials until a login succeeds or the user leaves.
#[derive(Debug, Default)]
pub struct LoginView;

impl LoginView {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl View for LoginView {
    fn id(&self) -> ViewId {
        ViewId::Login
    }

    async fn render(&mut self, ctx: ViewContext<'_>) -> AppResult<ViewAction> {
        let ViewContext::Login { sessions } = ctx else {
            return Err(AppError::internal("Login view rendered without a session manager"));
        };

        println!();
        println!("── AVDesk · Sign in ──");
        println!("(leave the username empty to exit)");

        loop {
            let username: String = Input::new()
                .with_prompt("Username")
                .allow_empty(true)
                .interact_text()
                .map_err(input_error)?;
            if username.trim().is_empty() {
                return Ok(ViewAction::Quit);
            }

            let secret = Password::new()
                .with_prompt("Password")
                .interact()
                .map_err(input_error)?;

            match sessions.login(&Credential::new(username.trim(), secret)).await {
                Ok(session) => {
                    println!("✓ Welcome, {}", session.display_name());
                    return Ok(ViewAction::LoggedIn(session));
                }
                Err(AuthError::InvalidCredentials) => {
                    eprintln!("✗ Invalid username or password");
                }
                Err(AuthError::Unavailable(e)) => {
                    warn!(error = %e, "Login could not be completed");
                    eprintln!("✗ Sign-in is unavailable right now, please try again");
                }
            }
        }
    }
}
