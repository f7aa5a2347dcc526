//! Role → permission-set capability resolution.
//!
//! The one place a role's grants are defined. Call sites resolve the
//! full set once per session instead of re-deriving ad-hoc booleans
//! from the role at each check.

use crate::errors::{ConfigError, ConfigResult};
use crate::types::collections::FxHashMap;

use super::permission::{self, tokens, Permission, PermissionSet};
use super::role::Role;

/// Tokens granted to a role. Higher roles repeat lower roles' tokens
/// explicitly; nothing is implied by role alone.
fn role_tokens(role: Role) -> &'static [&'static str] {
    match role {
        Role::SuperAdmin => &permission::REGISTERED,

        Role::Admin => &[
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
            tokens::SETTINGS_MANAGE,
        ],

        Role::HrAdmin => &[
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
            tokens::BENEFITS_VIEW,
            tokens::BENEFITS_MANAGE,
            tokens::COMPENSATION_VIEW,
            tokens::COMPLIANCE_VIEW,
            tokens::REPORTS_VIEW,
        ],

        Role::Manager => &[
            tokens::DASHBOARD_VIEW,
            tokens::JOBS_VIEW,
            tokens::JOBS_POST,
            tokens::CANDIDATES_VIEW,
            tokens::CANDIDATES_MANAGE,
            tokens::EMPLOYEES_VIEW,
            tokens::ATTENDANCE_VIEW,
            tokens::ATTENDANCE_APPROVE,
            tokens::SALES_DASHBOARD_VIEW,
            tokens::SALES_TEAM_MANAGE,
            tokens::REPORTS_VIEW,
        ],

        Role::DepartmentHead => &[
            tokens::DASHBOARD_VIEW,
            tokens::JOBS_VIEW,
            tokens::CANDIDATES_VIEW,
            tokens::EMPLOYEES_VIEW,
            tokens::ATTENDANCE_VIEW,
            tokens::ATTENDANCE_APPROVE,
            tokens::REPORTS_VIEW,
        ],

        Role::Employee => &[
            tokens::DASHBOARD_VIEW,
            tokens::ATTENDANCE_VIEW,
            tokens::PAYROLL_VIEW,
            tokens::BENEFITS_VIEW,
        ],

        Role::Contractor => &[tokens::DASHBOARD_VIEW, tokens::ATTENDANCE_VIEW],

        Role::Viewer => &[
            tokens::DASHBOARD_VIEW,
            tokens::JOBS_VIEW,
            tokens::CANDIDATES_VIEW,
            tokens::EMPLOYEES_VIEW,
            tokens::REPORTS_VIEW,
        ],
    }
}

/// Resolve the capability set for a role.
pub fn capabilities_for_role(role: Role) -> PermissionSet {
    role_tokens(role)
        .iter()
        .map(|token| Permission::new(*token))
        .collect()
}

/// The builtin capability map for all roles.
pub fn capability_map() -> FxHashMap<Role, PermissionSet> {
    Role::ALL
        .iter()
        .map(|&role| (role, capabilities_for_role(role)))
        .collect()
}

/// Capability map with configured extra grants merged in.
/// Grant keys must name known roles; granted tokens must be registered.
pub fn capability_map_with_grants(
    grants: &FxHashMap<String, Vec<String>>,
) -> ConfigResult<FxHashMap<Role, PermissionSet>> {
    let mut map = capability_map();
    for (role_name, granted) in grants {
        let role = Role::parse(role_name).ok_or_else(|| ConfigError::UnknownRole {
            role: role_name.clone(),
        })?;
        for token in granted {
            if !permission::is_registered(token) {
                return Err(ConfigError::UnknownPermission {
                    role: role_name.clone(),
                    token: token.clone(),
                });
            }
            map.entry(role)
                .or_default()
                .insert(Permission::new(token.clone()));
        }
    }
    Ok(map)
}
