//! Access resolver tests: available modules, incremental cost, and the
//! module access predicate over both a small scenario catalog and the
//! builtin catalog.

use turnstile_core::catalog::{EntitlementTable, ModuleDef, SubscriptionTier};
use turnstile_engine::resolver::{
    available_modules, has_module_access, monthly_cost_cents, ModuleSelection,
};

/// Scenario catalog: Standard bundles {ats, hrms}; payroll is a
/// Premium-bundled add-on.
fn scenario_table() -> EntitlementTable {
    fn def(
        name: &str,
        price: u32,
        included_in: &[SubscriptionTier],
        addon: bool,
    ) -> ModuleDef {
        ModuleDef {
            name: name.to_string(),
            label: name.to_string(),
            monthly_price_cents: price,
            included_in: included_in.to_vec(),
            addon,
        }
    }

    use SubscriptionTier::*;
    EntitlementTable::new(vec![
        def("ats", 4900, &[Standard, Premium, Enterprise], true),
        def("hrms", 5900, &[Standard, Premium, Enterprise], true),
        def("payroll", 9900, &[Premium, Enterprise], true),
    ])
    .unwrap()
}

// ============================================================
// Available modules
// ============================================================

#[test]
fn standard_with_payroll_addon() {
    let table = scenario_table();
    let selection = ModuleSelection::with_addons(["payroll"]);

    let available = available_modules(&table, SubscriptionTier::Standard, &selection);
    assert_eq!(available, vec!["ats", "hrms", "payroll"]);

    let cost = monthly_cost_cents(&table, SubscriptionTier::Standard, &selection);
    assert_eq!(cost, 9900);
}

#[test]
fn addon_duplicating_base_module_is_ignored() {
    let table = scenario_table();
    let selection = ModuleSelection::with_addons(["ats"]);

    let available = available_modules(&table, SubscriptionTier::Standard, &selection);
    assert_eq!(available, vec!["ats", "hrms"]);

    let cost = monthly_cost_cents(&table, SubscriptionTier::Standard, &selection);
    assert_eq!(cost, 0);
}

#[test]
fn no_addons_yields_exactly_the_base_set() {
    let table = scenario_table();
    let selection = ModuleSelection::default();

    assert_eq!(
        available_modules(&table, SubscriptionTier::Standard, &selection),
        table.modules_for_tier(SubscriptionTier::Standard)
    );
    assert_eq!(
        monthly_cost_cents(&table, SubscriptionTier::Standard, &selection),
        0
    );
}

#[test]
fn addons_preserve_purchase_order_after_base() {
    let table = scenario_table();
    // Premium already bundles payroll; ats/hrms dedupe into the base set.
    let selection = ModuleSelection::with_addons(["payroll", "hrms"]);

    let available = available_modules(&table, SubscriptionTier::Premium, &selection);
    assert_eq!(available, vec!["ats", "hrms", "payroll"]);
}

#[test]
fn unknown_addon_is_not_provisionable() {
    let table = scenario_table();
    let selection = ModuleSelection::with_addons(["timecrystals"]);

    let available = available_modules(&table, SubscriptionTier::Standard, &selection);
    assert_eq!(available, vec!["ats", "hrms"]);
    assert_eq!(
        monthly_cost_cents(&table, SubscriptionTier::Standard, &selection),
        0
    );
}

#[test]
fn duplicate_addon_entries_count_once() {
    let table = scenario_table();
    let selection = ModuleSelection::with_addons(["payroll", "payroll"]);

    let available = available_modules(&table, SubscriptionTier::Standard, &selection);
    assert_eq!(available, vec!["ats", "hrms", "payroll"]);
    assert_eq!(
        monthly_cost_cents(&table, SubscriptionTier::Standard, &selection),
        9900
    );
}

#[test]
fn free_tier_with_no_catalog_entries_is_empty() {
    let table = scenario_table();
    let selection = ModuleSelection::default();
    assert!(available_modules(&table, SubscriptionTier::Free, &selection).is_empty());
}

// ============================================================
// Access predicate
// ============================================================

#[test]
fn unpurchased_module_is_denied() {
    let table = scenario_table();
    let selection = ModuleSelection::default();
    assert!(!has_module_access(
        &table,
        SubscriptionTier::Standard,
        &selection,
        "payroll"
    ));
}

#[test]
fn purchased_addon_is_allowed() {
    let table = scenario_table();
    let selection = ModuleSelection::with_addons(["payroll"]);
    assert!(has_module_access(
        &table,
        SubscriptionTier::Standard,
        &selection,
        "payroll"
    ));
}

#[test]
fn unknown_module_is_always_denied() {
    let table = scenario_table();
    let selection = ModuleSelection::with_addons(["timecrystals"]);
    assert!(!has_module_access(
        &table,
        SubscriptionTier::Enterprise,
        &selection,
        "timecrystals"
    ));
}

#[test]
fn predicate_matches_available_list() {
    let table = EntitlementTable::builtin();
    let selection = ModuleSelection::with_addons(["sales", "payroll"]);

    for tier in SubscriptionTier::ALL {
        let available = available_modules(&table, tier, &selection);
        for def in table.modules() {
            assert_eq!(
                has_module_access(&table, tier, &selection, &def.name),
                available.contains(&def.name.as_str()),
                "mismatch for '{}' at {}",
                def.name,
                tier
            );
        }
    }
}

#[test]
fn base_modules_never_hidden_by_selection() {
    let table = EntitlementTable::builtin();
    // Product-line toggles off must not hide contractual base modules.
    let selection = ModuleSelection {
        ats_enabled: false,
        hrms_enabled: false,
        enabled_addons: vec![],
    };

    for tier in SubscriptionTier::ALL {
        let available = available_modules(&table, tier, &selection);
        for name in table.modules_for_tier(tier) {
            assert!(available.contains(&name));
        }
    }
}

#[test]
fn resolution_is_idempotent() {
    let table = EntitlementTable::builtin();
    let selection = ModuleSelection::with_addons(["compliance", "sales"]);

    let first = available_modules(&table, SubscriptionTier::Standard, &selection);
    let second = available_modules(&table, SubscriptionTier::Standard, &selection);
    assert_eq!(first, second);

    assert_eq!(
        monthly_cost_cents(&table, SubscriptionTier::Standard, &selection),
        monthly_cost_cents(&table, SubscriptionTier::Standard, &selection)
    );
}
