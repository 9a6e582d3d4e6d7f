//! Application view identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mutually exclusive screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    /// Credential prompt shown when nobody is logged in.
    Login,
    /// Full administration dashboard.
    AdminDashboard,
    /// Loan and resource management dashboard for authorized staff.
    AudiovisualDashboard,
    /// Read-only consultant dashboard.
    ConsultantDashboard,
    /// Teacher schedule and personal loans dashboard.
    TeacherDashboard,
    /// Student schedule dashboard.
    StudentDashboard,
}

impl ViewId {
    /// Every view, in declaration order.
    pub const ALL: [ViewId; 6] = [
        Self::Login,
        Self::AdminDashboard,
        Self::AudiovisualDashboard,
        Self::ConsultantDashboard,
        Self::TeacherDashboard,
        Self::StudentDashboard,
    ];

    /// Return the view name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::AdminDashboard => "admin_dashboard",
            Self::AudiovisualDashboard => "audiovisual_dashboard",
            Self::ConsultantDashboard => "consultant_dashboard",
            Self::TeacherDashboard => "teacher_dashboard",
            Self::StudentDashboard => "student_dashboard",
        }
    }

    /// Whether this is a role dashboard rather than the login screen.
    pub fn is_dashboard(&self) -> bool {
        !matches!(self, Self::Login)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
