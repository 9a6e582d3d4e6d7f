//! Role routing: picks the single view for the current role.

use tracing::warn;

use avdesk_entity::user::UserRole;
use avdesk_entity::view::ViewId;

use super::table::ViewTable;

/// Pure mapping from the current role (or no session) to exactly one view.
#[derive(Debug, Clone)]
pub struct RoleRouter {
    /// The routing table.
    table: ViewTable,
}

impl RoleRouter {
    /// Creates a router with the default table.
    pub fn new() -> Self {
        Self {
            table: ViewTable::new(),
        }
    }

    /// Creates a router with a custom table.
    pub fn with_table(table: ViewTable) -> Self {
        Self { table }
    }

    /// Selects the view for a role. No session selects the login view, and
    /// so does any role the table does not route.
    pub fn select_view(&self, role: Option<UserRole>) -> ViewId {
        let Some(role) = role else {
            return ViewId::Login;
        };

        match self.table.dashboard_for(&role) {
            Some(view) => view,
            None => {
                warn!(role = %role, "No dashboard routed for role, showing login");
                ViewId::Login
            }
        }
    }

    /// Selects the view for a raw role tag. Unrecognized tags select the
    /// login view.
    pub fn select_view_for_tag(&self, tag: &str) -> ViewId {
        match tag.parse::<UserRole>() {
            Ok(role) => self.select_view(Some(role)),
            Err(_) => {
                warn!(tag, "Unrecognized role tag, showing login");
                ViewId::Login
            }
        }
    }

    /// Returns a reference to the underlying table.
    pub fn table(&self) -> &ViewTable {
        &self.table
    }
}

impl Default for RoleRouter {
    fn default() -> Self {
        Self::new()
    }
}
