//! Permission gate — stateless allow/deny decisions over a session's
//! granted permission set. Evaluated fresh on each check; callers re-ask
//! when the granted set changes.

use smallvec::SmallVec;
use tracing::warn;

use turnstile_core::config::{GateConfig, UnconstrainedGate};
use turnstile_core::identity::{Permission, PermissionSet};

/// Requirement options for one gate evaluation.
///
/// A single `permission` wins over the `permissions` list when both are
/// set. With neither, the decision follows [`GateConfig::unconstrained`].
#[derive(Debug, Clone, Default)]
pub struct GateOptions {
    pub permission: Option<Permission>,
    pub permissions: Option<SmallVec<[Permission; 4]>>,
    /// List semantics: all-of when true, any-of when false (the default).
    pub require_all: bool,
}

impl GateOptions {
    /// Require a single permission.
    pub fn single(permission: impl Into<Permission>) -> Self {
        Self {
            permission: Some(permission.into()),
            ..Self::default()
        }
    }

    /// Require at least one of the given permissions.
    pub fn any_of<I, P>(permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            permissions: Some(permissions.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Require every one of the given permissions.
    pub fn all_of<I, P>(permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            permissions: Some(permissions.into_iter().map(Into::into).collect()),
            require_all: true,
            permission: None,
        }
    }

    /// No constraint — resolution follows the configured unconstrained
    /// policy.
    pub fn unconstrained() -> Self {
        Self::default()
    }
}

/// Exact-membership check for a single permission.
pub fn has_permission(granted: &PermissionSet, required: &Permission) -> bool {
    granted.contains(required)
}

/// True iff any required permission is granted.
/// Vacuously false for an empty requirement list.
pub fn has_any_permission(granted: &PermissionSet, required: &[Permission]) -> bool {
    required.iter().any(|permission| granted.contains(permission))
}

/// True iff every required permission is granted.
/// Vacuously true for an empty requirement list.
pub fn has_all_permissions(granted: &PermissionSet, required: &[Permission]) -> bool {
    required.iter().all(|permission| granted.contains(permission))
}

/// Resolve a gate decision for `options` under the configured policy.
/// An unconstrained evaluation under the `Allow` policy is logged — a
/// forgotten constraint must be visible, not silent.
pub fn resolve_gate(config: &GateConfig, granted: &PermissionSet, options: &GateOptions) -> bool {
    if let Some(permission) = &options.permission {
        return has_permission(granted, permission);
    }

    if let Some(permissions) = &options.permissions {
        return if options.require_all {
            has_all_permissions(granted, permissions)
        } else {
            has_any_permission(granted, permissions)
        };
    }

    match config.unconstrained {
        UnconstrainedGate::Allow => {
            warn!("permission gate evaluated without a constraint; allowing by policy");
            true
        }
        UnconstrainedGate::Deny => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(tokens: &[&str]) -> PermissionSet {
        tokens.iter().map(|t| Permission::new(*t)).collect()
    }

    #[test]
    fn single_permission_exact_match() {
        let set = granted(&["sales.dashboard.view"]);
        assert!(has_permission(&set, &Permission::new("sales.dashboard.view")));
        assert!(!has_permission(&set, &Permission::new("sales.team.manage")));
        // No prefix or hierarchy semantics.
        assert!(!has_permission(&set, &Permission::new("sales.dashboard")));
    }

    #[test]
    fn single_wins_over_list() {
        let set = granted(&["jobs.view"]);
        let options = GateOptions {
            permission: Some(Permission::new("jobs.view")),
            permissions: Some(
                [Permission::new("users.manage")].into_iter().collect(),
            ),
            require_all: true,
        };
        assert!(resolve_gate(&GateConfig::default(), &set, &options));
    }

    #[test]
    fn unconstrained_deny_policy_fails_closed() {
        let config = GateConfig {
            unconstrained: UnconstrainedGate::Deny,
        };
        let set = granted(&["jobs.view"]);
        assert!(!resolve_gate(&config, &set, &GateOptions::unconstrained()));
    }
}
