//! Permission tokens and the central registry.
//!
//! Tokens are opaque strings checked by exact match — no hierarchy or
//! implication is computed between them. The registry is the closed set
//! of tokens the platform knows; it exists to catch typos when grants
//! are configured, not to add runtime structure. Unknown tokens are
//! always denied.

use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashSet;

/// An opaque permission token (e.g. `sales.dashboard.view`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this token is in the central registry.
    pub fn is_registered(&self) -> bool {
        is_registered(&self.0)
    }
}

impl From<&str> for Permission {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Permission {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Granted permissions for one user session.
/// Created on login, held in memory, discarded on logout — never persisted.
pub type PermissionSet = FxHashSet<Permission>;

/// All registered permission tokens, grouped by surface.
pub mod tokens {
    pub const DASHBOARD_VIEW: &str = "dashboard.view";

    pub const JOBS_VIEW: &str = "jobs.view";
    pub const JOBS_POST: &str = "jobs.post";
    pub const CANDIDATES_VIEW: &str = "candidates.view";
    pub const CANDIDATES_MANAGE: &str = "candidates.manage";

    pub const EMPLOYEES_VIEW: &str = "employees.view";
    pub const EMPLOYEES_MANAGE: &str = "employees.manage";
    pub const ATTENDANCE_VIEW: &str = "attendance.view";
    pub const ATTENDANCE_APPROVE: &str = "attendance.approve";

    pub const PAYROLL_VIEW: &str = "payroll.view";
    pub const PAYROLL_RUN: &str = "payroll.run";
    pub const BENEFITS_VIEW: &str = "benefits.view";
    pub const BENEFITS_MANAGE: &str = "benefits.manage";
    pub const COMPENSATION_VIEW: &str = "compensation.view";

    pub const SALES_DASHBOARD_VIEW: &str = "sales.dashboard.view";
    pub const SALES_TEAM_MANAGE: &str = "sales.team.manage";

    pub const COMPLIANCE_VIEW: &str = "compliance.view";
    pub const REPORTS_VIEW: &str = "reports.view";

    pub const USERS_MANAGE: &str = "users.manage";
    pub const BILLING_MANAGE: &str = "billing.manage";
    pub const SETTINGS_MANAGE: &str = "settings.manage";
}

/// The closed registry of known tokens.
pub const REGISTERED: [&str; 21] = [
    tokens::DASHBOARD_VIEW,
    tokens::JOBS_VIEW,
    tokens::JOBS_POST,
    tokens::CANDIDATES_VIEW,
    tokens::CANDIDATES_MANAGE,
    tokens::EMPLOYEES_VIEW,
    tokens::EMPLOYEES_MANAGE,
    tokens::ATTENDANCE_VIEW,
    tokens::ATTENDANCE_APPROVE,
    tokens::PAYROLL_VIEW,
    tokens::PAYROLL_RUN,
    tokens::BENEFITS_VIEW,
    tokens::BENEFITS_MANAGE,
    tokens::COMPENSATION_VIEW,
    tokens::SALES_DASHBOARD_VIEW,
    tokens::SALES_TEAM_MANAGE,
    tokens::COMPLIANCE_VIEW,
    tokens::REPORTS_VIEW,
    tokens::USERS_MANAGE,
    tokens::BILLING_MANAGE,
    tokens::SETTINGS_MANAGE,
];

/// True if `token` is a registered permission token.
pub fn is_registered(token: &str) -> bool {
    REGISTERED.contains(&token)
}

/// Snapshot of the registry as a set, for bulk validation.
pub fn registry() -> FxHashSet<&'static str> {
    REGISTERED.iter().copied().collect()
}
