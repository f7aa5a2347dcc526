//! Subscription tiers.

use serde::{Deserialize, Serialize};

/// The four subscription tiers, lowest to highest.
/// Variant order is the upgrade order; `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Standard,
    Premium,
    Enterprise,
}

impl SubscriptionTier {
    /// All tiers, lowest to highest.
    pub const ALL: [SubscriptionTier; 4] = [
        Self::Free,
        Self::Standard,
        Self::Premium,
        Self::Enterprise,
    ];

    /// Tier name as string (for config, logging, token claims).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Enterprise => "enterprise",
        }
    }

    /// Parse a tier from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(Self::Free),
            "standard" => Some(Self::Standard),
            "premium" => Some(Self::Premium),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }

    /// Display name for pricing pages and upgrade prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
            Self::Enterprise => "Enterprise",
        }
    }

    /// True if this tier is at or above `other`.
    pub fn at_least(&self, other: SubscriptionTier) -> bool {
        *self >= other
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
