//! Role-to-view mapping definitions.

use std::collections::HashMap;

use avdesk_entity::user::UserRole;
use avdesk_entity::view::ViewId;

/// The `{role → dashboard}` mapping.
#[derive(Debug, Clone)]
pub struct ViewTable {
    /// Role → dashboard view.
    routes: HashMap<UserRole, ViewId>,
}

impl ViewTable {
    /// Creates the default table covering every role.
    pub fn new() -> Self {
        let routes = UserRole::ALL
            .into_iter()
            .map(|role| (role, default_dashboard(role)))
            .collect();
        Self { routes }
    }

    /// Creates an empty table. Roles without a route fail closed to
    /// [`ViewId::Login`].
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Sets the dashboard for a role, replacing any previous route.
    pub fn with_route(mut self, role: UserRole, view: ViewId) -> Self {
        self.routes.insert(role, view);
        self
    }

    /// Returns the dashboard for a role, if one is routed.
    pub fn dashboard_for(&self, role: &UserRole) -> Option<ViewId> {
        self.routes.get(role).copied()
    }

    /// Roles that have no route.
    pub fn uncovered_roles(&self) -> Vec<UserRole> {
        UserRole::ALL
            .into_iter()
            .filter(|role| !self.routes.contains_key(role))
            .collect()
    }
}

impl Default for ViewTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Exhaustive default routing; adding a role fails to compile until it is
/// routed here.
fn default_dashboard(role: UserRole) -> ViewId {
    match role {
        UserRole::Admin => ViewId::AdminDashboard,
        UserRole::Authorized => ViewId::AudiovisualDashboard,
        UserRole::Consultant => ViewId::ConsultantDashboard,
        UserRole::ConsultantTeacher => ViewId::TeacherDashboard,
        UserRole::ConsultantStudent => ViewId::StudentDashboard,
    }
}
