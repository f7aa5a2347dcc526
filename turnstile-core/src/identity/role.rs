//! User roles.

use serde::{Deserialize, Serialize};

/// The closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    HrAdmin,
    Manager,
    DepartmentHead,
    Employee,
    Contractor,
    Viewer,
}

impl Role {
    /// All roles.
    pub const ALL: [Role; 8] = [
        Self::SuperAdmin,
        Self::Admin,
        Self::HrAdmin,
        Self::Manager,
        Self::DepartmentHead,
        Self::Employee,
        Self::Contractor,
        Self::Viewer,
    ];

    /// Role name as string (for config, logging, session claims).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::HrAdmin => "hr_admin",
            Self::Manager => "manager",
            Self::DepartmentHead => "department_head",
            Self::Employee => "employee",
            Self::Contractor => "contractor",
            Self::Viewer => "viewer",
        }
    }

    /// Parse a role from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "super_admin" => Some(Self::SuperAdmin),
            "admin" => Some(Self::Admin),
            "hr_admin" => Some(Self::HrAdmin),
            "manager" => Some(Self::Manager),
            "department_head" => Some(Self::DepartmentHead),
            "employee" => Some(Self::Employee),
            "contractor" => Some(Self::Contractor),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// True for roles with access to admin consoles.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin | Self::HrAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
