//! Module access and cost computation.

use turnstile_core::catalog::{EntitlementTable, SubscriptionTier};
use turnstile_core::types::collections::FxHashSet;

use super::selection::ModuleSelection;

/// Effective modules for a subscription snapshot: the tier base set first
/// in catalog order, then add-ons in purchase order. Deduplicated.
/// Add-on names missing from the catalog are skipped — an unknown module
/// is never provisionable.
pub fn available_modules<'t>(
    table: &'t EntitlementTable,
    tier: SubscriptionTier,
    selection: &ModuleSelection,
) -> Vec<&'t str> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::new();

    for name in table.modules_for_tier(tier) {
        if seen.insert(name) {
            out.push(name);
        }
    }

    for addon in &selection.enabled_addons {
        let Some(def) = table.module(addon) else {
            continue;
        };
        let name = def.name.as_str();
        if seen.insert(name) {
            out.push(name);
        }
    }

    out
}

/// Incremental monthly cost in cents: the sum over add-ons not already in
/// the tier base set, each counted at most once. The tier's own flat price
/// is billed elsewhere and never computed here.
pub fn monthly_cost_cents(
    table: &EntitlementTable,
    tier: SubscriptionTier,
    selection: &ModuleSelection,
) -> u64 {
    let base: FxHashSet<&str> = table.modules_for_tier(tier).into_iter().collect();
    let mut counted: FxHashSet<&str> = FxHashSet::default();
    let mut total = 0u64;

    for addon in &selection.enabled_addons {
        if base.contains(addon.as_str()) {
            continue;
        }
        if !counted.insert(addon.as_str()) {
            continue;
        }
        total += u64::from(table.module_price_cents(addon));
    }

    total
}

/// Access predicate: membership in [`available_modules`], without building
/// the list. Unknown module names are always denied.
pub fn has_module_access(
    table: &EntitlementTable,
    tier: SubscriptionTier,
    selection: &ModuleSelection,
    name: &str,
) -> bool {
    let Some(def) = table.module(name) else {
        return false;
    };
    if def.included_in_tier(tier) {
        return true;
    }
    selection.enabled_addons.iter().any(|addon| addon == name)
}
