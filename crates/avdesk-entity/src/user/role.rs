//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of roles a logged-in user can hold.
///
/// "No user logged in" is not a role; it is represented by the absence of a
/// session (`Option<UserRole>::None` at the routing boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// Full administrator.
    Admin,
    /// Staff authorized to manage audiovisual loans and resources.
    Authorized,
    /// General read-only consultant.
    Consultant,
    /// Teacher consultant: own schedule and personal loans.
    ConsultantTeacher,
    /// Student consultant: own schedule only.
    ConsultantStudent,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [UserRole; 5] = [
        Self::Admin,
        Self::Authorized,
        Self::Consultant,
        Self::ConsultantTeacher,
        Self::ConsultantStudent,
    ];

    /// Return the role as its canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Authorized => "authorized",
            Self::Consultant => "consultant",
            Self::ConsultantTeacher => "consultant-teacher",
            Self::ConsultantStudent => "consultant-student",
        }
    }

    /// Human-readable label for headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Authorized => "Authorized staff",
            Self::Consultant => "Consultant",
            Self::ConsultantTeacher => "Teacher",
            Self::ConsultantStudent => "Student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = avdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "authorized" => Ok(Self::Authorized),
            "consultant" => Ok(Self::Consultant),
            "consultant-teacher" => Ok(Self::ConsultantTeacher),
            "consultant-student" => Ok(Self::ConsultantStudent),
            _ => Err(avdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, authorized, consultant, \
                 consultant-teacher, consultant-student"
            ))),
        }
    }
}
