//! Module definitions.

use serde::{Deserialize, Serialize};

use super::tier::SubscriptionTier;

/// A product module (e.g. payroll) — bundled into tier base sets,
/// sold as a standalone add-on, or both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleDef {
    /// Unique module name (e.g. "payroll"). The exact-match key everywhere.
    pub name: String,
    /// Human-readable label for pricing pages and upgrade prompts.
    pub label: String,
    /// Monthly add-on price in cents. 0 = free or bundled-only.
    #[serde(default)]
    pub monthly_price_cents: u32,
    /// Tiers whose base set includes this module.
    #[serde(default)]
    pub included_in: Vec<SubscriptionTier>,
    /// Purchasable as a standalone add-on outside `included_in` tiers.
    #[serde(default)]
    pub addon: bool,
}

impl ModuleDef {
    pub fn included_in_tier(&self, tier: SubscriptionTier) -> bool {
        self.included_in.contains(&tier)
    }

    /// Lowest tier whose base set includes this module, if any tier does.
    pub fn min_tier(&self) -> Option<SubscriptionTier> {
        self.included_in.iter().copied().min()
    }
}
