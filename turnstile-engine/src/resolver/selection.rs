//! Employer module selection — the billing-owned half of a subscription
//! snapshot.

use serde::{Deserialize, Serialize};

/// The module portion of an employer's subscription snapshot.
///
/// `ats_enabled`/`hrms_enabled` are billing-owned product-line toggles
/// surfaced to hosts; they never hide tier base modules from the
/// resolver — base sets are contractual.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModuleSelection {
    pub ats_enabled: bool,
    pub hrms_enabled: bool,
    /// Add-on module names purchased outside the tier base set, in
    /// purchase order.
    pub enabled_addons: Vec<String>,
}

impl Default for ModuleSelection {
    fn default() -> Self {
        Self {
            ats_enabled: true,
            hrms_enabled: true,
            enabled_addons: Vec::new(),
        }
    }
}

impl ModuleSelection {
    /// Selection with the given add-ons, product-line toggles defaulted on.
    pub fn with_addons<I, S>(addons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled_addons: addons.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
