//! Entitlement engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{EntitlementTable, ModuleDef, SubscriptionTier};
use crate::errors::ConfigResult;
use crate::identity::{capability_map_with_grants, PermissionSet, Role};
use crate::types::collections::FxHashMap;

pub const DEFAULT_UPGRADE_URL: &str = "https://turnstilehq.com/pricing";

/// Top-level TOML configuration for the entitlement engine.
/// Every field is defaulted; an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntitlementConfig {
    /// Subscription tier of record when no entitlement token is present.
    pub tier: Option<SubscriptionTier>,
    /// Path to the billing-issued entitlement token file.
    pub token_path: Option<String>,
    /// Environment variable holding an entitlement token.
    pub token_env: Option<String>,
    /// Upgrade URL used in denial messages.
    pub upgrade_url: Option<String>,
    /// Module catalog (`[[module]]`). Empty = use the builtin catalog.
    #[serde(rename = "module")]
    pub modules: Vec<ModuleDef>,
    /// Permission gate policy (`[gate]`).
    pub gate: GateConfig,
    /// Extra permission grants per role (`[grants]`), merged over the
    /// builtin capability table.
    pub grants: FxHashMap<String, Vec<String>>,
}

impl EntitlementConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), modules = config.modules.len(), "Entitlement config loaded");
        Ok(config)
    }

    /// Build the entitlement table: configured catalog if present,
    /// builtin otherwise.
    pub fn build_table(&self) -> ConfigResult<EntitlementTable> {
        if self.modules.is_empty() {
            Ok(EntitlementTable::builtin())
        } else {
            EntitlementTable::new(self.modules.clone())
        }
    }

    /// Resolve role capabilities with the configured grants merged in.
    pub fn resolve_capabilities(&self) -> ConfigResult<FxHashMap<Role, PermissionSet>> {
        capability_map_with_grants(&self.grants)
    }

    pub fn effective_upgrade_url(&self) -> &str {
        self.upgrade_url.as_deref().unwrap_or(DEFAULT_UPGRADE_URL)
    }
}

/// Permission gate policy configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GateConfig {
    /// Decision for a gate evaluated with no permission constraint.
    pub unconstrained: UnconstrainedGate,
}

/// What an unconstrained gate resolves to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnconstrainedGate {
    /// Pass-through for unguarded content. Every allow is logged.
    #[default]
    Allow,
    /// Fail closed; callers must name a permission.
    Deny,
}
