//! Identity catalog commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use avdesk_auth::router::RoleRouter;
use avdesk_core::error::AppError;
use avdesk_entity::user::UserRole;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List configured identities
    List {
        /// Filter by role tag
        #[arg(short, long)]
        role: Option<String>,
    },
}

/// User display row
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// Identity ID
    id: String,
    /// Username
    username: String,
    /// Display name
    name: String,
    /// Role
    role: String,
    /// Landing view
    view: String,
}

/// Execute user commands
pub async fn execute(
    args: &UsersArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        UsersCommand::List { role } => {
            let role = role.as_deref().map(str::parse::<UserRole>).transpose()?;
            let identities = super::open_identities(&config)?;
            let router = RoleRouter::new();

            let rows: Vec<UserRow> = identities
                .identities()
                .into_iter()
                .filter(|i| role.is_none_or(|r| i.role == r))
                .map(|i| UserRow {
                    id: i.id.clone(),
                    username: i.username.clone(),
                    name: i.display_name.clone(),
                    role: i.role.as_str().to_string(),
                    view: router.select_view(Some(i.role)).to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
