//! Commands over the persisted session slot.

use clap::{Args, Subcommand};
use serde_json::json;

use crate::output::{self, OutputFormat};
use avdesk_auth::router::RoleRouter;
use avdesk_auth::session::StoredSession;
use avdesk_core::error::AppError;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Show the stored session and the view it routes to
    Show,
    /// Remove the stored session
    Clear {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute session commands
pub async fn execute(
    args: &SessionArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let sessions = super::open_sessions(&config).await?;

    match &args.command {
        SessionCommand::Show => {
            match sessions.inspect().await? {
                StoredSession::Empty => match format {
                    OutputFormat::Json => output::print_json(&json!({ "session": null })),
                    OutputFormat::Table => println!("No stored session."),
                },
                StoredSession::Valid(session) => {
                    let view = RoleRouter::new().select_view(Some(session.role()));
                    match format {
                        OutputFormat::Json => output::print_json(&json!({
                            "session": session,
                            "view": view.as_str(),
                        })),
                        OutputFormat::Table => {
                            println!("Stored session");
                            output::print_kv("Identity", session.identity_id());
                            output::print_kv("Name", session.display_name());
                            output::print_kv("Role", session.role().as_str());
                            output::print_kv("Started", &session.started_at().to_rfc3339());
                            output::print_kv("View", view.as_str());
                        }
                    }
                }
                StoredSession::Corrupt(e) => {
                    output::print_warning(&format!(
                        "Stored record is unreadable and will be treated as no session: {}",
                        e
                    ));
                }
            }
        }
        SessionCommand::Clear { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("Remove the stored session?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::input(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            sessions.logout().await?;
            output::print_success("Stored session removed");
        }
    }

    Ok(())
}
