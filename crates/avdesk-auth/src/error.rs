//! Login failure taxonomy.

use thiserror::Error;

use avdesk_core::error::AppError;

/// Why a login attempt did not produce a session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong secret. Recovered by prompting again.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// Infrastructure failure (e.g. the session slot could not be written).
    #[error("Authentication unavailable: {0}")]
    Unavailable(#[from] AppError),
}

impl AuthError {
    /// Whether the caller should simply re-prompt for credentials.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::authentication("Invalid username or password")
            }
            AuthError::Unavailable(inner) => inner,
        }
    }
}
