//! The entitlement table — immutable catalog of modules, prices, and
//! tier inclusion. Built once at startup (builtin or from config) and
//! passed by reference; validation failures are load-time `ConfigError`s,
//! never runtime ones.

use crate::errors::{ConfigError, ConfigResult};
use crate::types::collections::FxHashMap;

use super::module::ModuleDef;
use super::tier::SubscriptionTier;

#[derive(Debug, Clone)]
pub struct EntitlementTable {
    /// Definition order is the display order for tier base sets.
    modules: Vec<ModuleDef>,
    by_name: FxHashMap<String, usize>,
}

impl EntitlementTable {
    /// Build a table from module definitions, validating catalog invariants:
    /// unique names, and every module either bundled in a tier or flagged
    /// as a standalone add-on.
    pub fn new(modules: Vec<ModuleDef>) -> ConfigResult<Self> {
        let mut by_name = FxHashMap::default();
        for (idx, def) in modules.iter().enumerate() {
            if by_name.insert(def.name.clone(), idx).is_some() {
                return Err(ConfigError::DuplicateModule {
                    name: def.name.clone(),
                });
            }
            if def.included_in.is_empty() && !def.addon {
                return Err(ConfigError::OrphanModule {
                    name: def.name.clone(),
                });
            }
        }
        Ok(Self { modules, by_name })
    }

    /// The shipped HR/ATS catalog.
    pub fn builtin() -> Self {
        let modules = builtin_modules();
        let by_name = modules
            .iter()
            .enumerate()
            .map(|(idx, def)| (def.name.clone(), idx))
            .collect();
        Self { modules, by_name }
    }

    /// Base module names for a tier, in table-definition order.
    pub fn modules_for_tier(&self, tier: SubscriptionTier) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|def| def.included_in_tier(tier))
            .map(|def| def.name.as_str())
            .collect()
    }

    /// Monthly add-on price in cents; 0 for unknown or bundled-free modules.
    pub fn module_price_cents(&self, name: &str) -> u32 {
        self.module(name)
            .map(|def| def.monthly_price_cents)
            .unwrap_or(0)
    }

    /// Lookup a module definition by exact name.
    pub fn module(&self, name: &str) -> Option<&ModuleDef> {
        self.by_name.get(name).map(|&idx| &self.modules[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All module definitions, in definition order.
    pub fn modules(&self) -> &[ModuleDef] {
        &self.modules
    }

    /// Lowest tier that bundles `name`; `None` for add-on-only or
    /// unknown modules.
    pub fn min_tier_for(&self, name: &str) -> Option<SubscriptionTier> {
        self.module(name).and_then(ModuleDef::min_tier)
    }
}

fn builtin_modules() -> Vec<ModuleDef> {
    use SubscriptionTier::*;

    fn def(
        name: &str,
        label: &str,
        monthly_price_cents: u32,
        included_in: &[SubscriptionTier],
        addon: bool,
    ) -> ModuleDef {
        ModuleDef {
            name: name.to_string(),
            label: label.to_string(),
            monthly_price_cents,
            included_in: included_in.to_vec(),
            addon,
        }
    }

    vec![
        def("ats", "Applicant Tracking", 4900, &[Free, Standard, Premium, Enterprise], true),
        def("hrms", "HR Management", 5900, &[Standard, Premium, Enterprise], true),
        def("attendance", "Time & Attendance", 3900, &[Standard, Premium, Enterprise], true),
        def("payroll", "Payroll", 9900, &[Premium, Enterprise], true),
        def("benefits", "Benefits Administration", 7900, &[Premium, Enterprise], true),
        def("compensation", "Compensation Planning", 8900, &[Enterprise], true),
        def("compliance", "Compliance & Reporting", 6900, &[Enterprise], true),
        def("recruiting_analytics", "Recruiting Analytics", 5900, &[Enterprise], true),
        // Add-on only, not bundled in any tier.
        def("sales", "Sales CRM", 6900, &[], true),
    ]
}
