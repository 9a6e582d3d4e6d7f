//! AVDesk: audiovisual lending desk
//!
//! Main entry point that wires all crates together and runs the terminal
//! application on a single control thread.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use avdesk_auth::identity::IdentityStore;
use avdesk_auth::password::PasswordHasher;
use avdesk_auth::router::RoleRouter;
use avdesk_auth::session::{SessionManager, SessionStore};
use avdesk_core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use avdesk_core::error::AppError;
use avdesk_shell::{AppShell, Screen};
use avdesk_storage::StoreManager;

mod views;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Application error: {}", e);
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("AVDESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging on stderr so it stays out of the prompts
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Startup sequence followed by the render loop
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AVDesk v{}", env!("CARGO_PKG_VERSION"));

    let mut shell = AppShell::new(RoleRouter::new());
    if shell.screen() == Screen::Loading {
        views::show_loading();
    }

    // ── Step 1: Identity store ───────────────────────────────────
    tracing::info!("Initializing identity store...");
    let identities = IdentityStore::initialize(&config.identity, PasswordHasher::new())?;
    if identities.is_empty() {
        tracing::warn!("Identity catalog is empty; nobody will be able to log in");
    }
    let identities = Arc::new(identities);

    // ── Step 2: Session storage ──────────────────────────────────
    let backend = StoreManager::new(&config.storage).await?;
    let session_manager = SessionManager::new(
        identities,
        SessionStore::new(Arc::new(backend)),
        config.session.clone(),
    );

    // ── Step 3: Restore and route ────────────────────────────────
    let first_view = shell.start(session_manager).await?;
    tracing::info!(view = %first_view, "Startup complete");

    // ── Step 4: Render loop ──────────────────────────────────────
    let mut registry = views::terminal_registry();
    shell.run(&mut registry).await?;

    tracing::info!("AVDesk shut down");
    Ok(())
}
