//! CLI command definitions and dispatch.

pub mod password;
pub mod session;
pub mod users;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use avdesk_auth::identity::IdentityStore;
use avdesk_auth::password::PasswordHasher;
use avdesk_auth::session::{SessionManager, SessionStore};
use avdesk_core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use avdesk_core::error::AppError;
use avdesk_storage::StoreManager;

/// AVDesk identity and session administration
#[derive(Debug, Parser)]
#[command(name = "avdesk-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Identity catalog
    Users(users::UsersArgs),
    /// The persisted session slot
    Session(session::SessionArgs),
    /// Produce an Argon2id hash for a seed user entry
    HashPassword(password::HashPasswordArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Users(args) => users::execute(args, &self.config, self.format).await,
            Commands::Session(args) => session::execute(args, &self.config, self.format).await,
            Commands::HashPassword(args) => password::execute(args),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: identity catalog from the configured seed users
pub fn open_identities(config: &AppConfig) -> Result<IdentityStore, AppError> {
    IdentityStore::initialize(&config.identity, PasswordHasher::new())
}

/// Helper: session manager over the configured backend
pub async fn open_sessions(config: &AppConfig) -> Result<SessionManager, AppError> {
    let identities = Arc::new(open_identities(config)?);
    let backend = StoreManager::new(&config.storage).await?;
    Ok(SessionManager::new(
        identities,
        SessionStore::new(Arc::new(backend)),
        config.session.clone(),
    ))
}
