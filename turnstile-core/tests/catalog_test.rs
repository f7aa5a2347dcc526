//! Catalog and entitlement table tests: builtin catalog shape, tier base
//! sets, price lookups, and validation failures.

use turnstile_core::catalog::{EntitlementTable, ModuleDef, SubscriptionTier};
use turnstile_core::errors::{error_code, ConfigError, ErrorCode};

// ============================================================
// Builtin catalog
// ============================================================

#[test]
fn builtin_base_sets_grow_with_tier() {
    let table = EntitlementTable::builtin();

    let mut previous: Vec<&str> = Vec::new();
    for tier in SubscriptionTier::ALL {
        let base = table.modules_for_tier(tier);
        for name in &previous {
            assert!(
                base.contains(name),
                "{} lost module '{}' present in a lower tier",
                tier,
                name
            );
        }
        assert!(base.len() >= previous.len());
        previous = base;
    }
}

#[test]
fn builtin_free_tier_includes_ats() {
    let table = EntitlementTable::builtin();
    assert_eq!(table.modules_for_tier(SubscriptionTier::Free), vec!["ats"]);
}

#[test]
fn builtin_standard_tier_base_set() {
    let table = EntitlementTable::builtin();
    let base = table.modules_for_tier(SubscriptionTier::Standard);
    assert!(base.contains(&"ats"));
    assert!(base.contains(&"hrms"));
    assert!(base.contains(&"attendance"));
    assert!(!base.contains(&"payroll"));
}

#[test]
fn builtin_base_sets_follow_definition_order() {
    let table = EntitlementTable::builtin();
    let base = table.modules_for_tier(SubscriptionTier::Enterprise);

    let definition_order: Vec<&str> = table
        .modules()
        .iter()
        .filter(|def| def.included_in_tier(SubscriptionTier::Enterprise))
        .map(|def| def.name.as_str())
        .collect();
    assert_eq!(base, definition_order);
}

#[test]
fn builtin_every_module_reachable() {
    let table = EntitlementTable::builtin();
    for def in table.modules() {
        assert!(
            !def.included_in.is_empty() || def.addon,
            "module '{}' is neither bundled nor an add-on",
            def.name
        );
    }
}

// ============================================================
// Lookups
// ============================================================

#[test]
fn price_lookup_unknown_module_is_zero() {
    let table = EntitlementTable::builtin();
    assert!(table.module_price_cents("payroll") > 0);
    assert_eq!(table.module_price_cents("timecrystals"), 0);
}

#[test]
fn min_tier_for_bundled_and_addon_only_modules() {
    let table = EntitlementTable::builtin();
    assert_eq!(table.min_tier_for("ats"), Some(SubscriptionTier::Free));
    assert_eq!(table.min_tier_for("payroll"), Some(SubscriptionTier::Premium));
    // "sales" is add-on only.
    assert_eq!(table.min_tier_for("sales"), None);
    assert_eq!(table.min_tier_for("timecrystals"), None);
}

#[test]
fn contains_matches_module_lookup() {
    let table = EntitlementTable::builtin();
    assert!(table.contains("hrms"));
    assert!(table.module("hrms").is_some());
    assert!(!table.contains("hrm"));
    assert!(table.module("hrm").is_none());
}

// ============================================================
// Validation
// ============================================================

fn def(name: &str, included_in: &[SubscriptionTier], addon: bool) -> ModuleDef {
    ModuleDef {
        name: name.to_string(),
        label: name.to_string(),
        monthly_price_cents: 1000,
        included_in: included_in.to_vec(),
        addon,
    }
}

#[test]
fn duplicate_module_error_code() {
    let err = EntitlementTable::new(vec![
        def("ats", &[SubscriptionTier::Free], false),
        def("ats", &[SubscriptionTier::Standard], false),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateModule { ref name } if name == "ats"));
    assert_eq!(err.error_code(), error_code::DUPLICATE_MODULE);
}

#[test]
fn orphan_module_error_code() {
    let err = EntitlementTable::new(vec![def("ghost", &[], false)]).unwrap_err();
    assert!(matches!(err, ConfigError::OrphanModule { ref name } if name == "ghost"));
    assert_eq!(err.error_code(), error_code::ORPHAN_MODULE);
}

#[test]
fn addon_only_module_is_valid() {
    let table = EntitlementTable::new(vec![def("sales", &[], true)]).unwrap();
    assert!(table.contains("sales"));
    assert!(table.modules_for_tier(SubscriptionTier::Enterprise).is_empty());
}
