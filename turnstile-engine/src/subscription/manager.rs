//! SubscriptionManager — load, validate, check, hot-reload.
//! Central authority for module access decisions.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{info, warn};

use turnstile_core::catalog::{EntitlementTable, SubscriptionTier};
use turnstile_core::config::DEFAULT_UPGRADE_URL;

use crate::resolver::{self, ModuleSelection};

use super::token::{self, EntitlementClaims, TokenError};

/// Resolved subscription snapshot after loading and validation.
#[derive(Debug, Clone)]
pub struct SubscriptionSnapshot {
    pub tier: SubscriptionTier,
    pub selection: ModuleSelection,
    pub claims: Option<EntitlementClaims>,
    pub source: SubscriptionSource,
    pub status: SubscriptionStatus,
}

/// Where the subscription snapshot was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionSource {
    Default,
    ConfigFile,
    EnvironmentVariable,
    TokenFile(PathBuf),
}

/// Current subscription status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Valid,
    Expired,
    GracePeriod { days_remaining: u64 },
    Missing,
    Invalid(String),
}

/// Result of a module access check.
#[derive(Debug, Clone)]
pub enum ModuleAccess {
    Allowed,
    Denied {
        module: String,
        /// Lowest tier bundling the module; `None` for add-on-only modules.
        required_tier: Option<SubscriptionTier>,
        current_tier: SubscriptionTier,
        monthly_price_cents: u32,
        upgrade_url: String,
    },
    GracePeriod {
        module: String,
        days_remaining: u64,
    },
}

impl ModuleAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed | Self::GracePeriod { .. })
    }

    pub fn denial_message(&self) -> Option<String> {
        match self {
            Self::Denied {
                module,
                required_tier: Some(tier),
                upgrade_url,
                ..
            } => Some(format!(
                "Module '{}' requires the {} tier. Upgrade at {}",
                module,
                tier.display_name(),
                upgrade_url
            )),
            Self::Denied {
                module,
                required_tier: None,
                monthly_price_cents,
                upgrade_url,
                ..
            } => Some(format!(
                "Module '{}' is available as an add-on (${}.{:02}/month). Purchase at {}",
                module,
                monthly_price_cents / 100,
                monthly_price_cents % 100,
                upgrade_url
            )),
            Self::GracePeriod {
                module,
                days_remaining,
            } => Some(format!(
                "Subscription expired. Module '{}' available for {} more day(s). Renew to continue.",
                module, days_remaining
            )),
            Self::Allowed => None,
        }
    }
}

/// Days an expired subscription keeps its modules before degrading to Free.
const GRACE_PERIOD_DAYS: u64 = 7;

/// Thread-safe, hot-reloadable subscription authority.
pub struct SubscriptionManager {
    state: RwLock<SubscriptionSnapshot>,
    token_path: Option<PathBuf>,
    upgrade_url: String,
}

impl SubscriptionManager {
    /// Manager with the default Free snapshot.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SubscriptionSnapshot {
                tier: SubscriptionTier::Free,
                selection: ModuleSelection::default(),
                claims: None,
                source: SubscriptionSource::Default,
                status: SubscriptionStatus::Valid,
            }),
            token_path: None,
            upgrade_url: DEFAULT_UPGRADE_URL.to_string(),
        }
    }

    /// Load the subscription from all available sources.
    /// Priority: token file > env var > config tier > default (Free).
    pub fn load(
        token_path: Option<&Path>,
        env_key: Option<&str>,
        config_tier: Option<SubscriptionTier>,
        upgrade_url: Option<&str>,
    ) -> Self {
        let mgr = Self {
            state: RwLock::new(SubscriptionSnapshot {
                tier: SubscriptionTier::Free,
                selection: ModuleSelection::default(),
                claims: None,
                source: SubscriptionSource::Default,
                status: SubscriptionStatus::Missing,
            }),
            token_path: token_path.map(Path::to_path_buf),
            upgrade_url: upgrade_url.unwrap_or(DEFAULT_UPGRADE_URL).to_string(),
        };

        // Try the token file first
        if let Some(path) = token_path {
            if let Ok(snapshot) = mgr.load_from_token_file(path) {
                *mgr.state.write().unwrap() = snapshot;
                return mgr;
            }
        }

        // Try the environment variable
        if let Some(key) = env_key {
            if let Ok(value) = std::env::var(key) {
                if let Ok(snapshot) =
                    mgr.load_from_token_string(&value, SubscriptionSource::EnvironmentVariable)
                {
                    *mgr.state.write().unwrap() = snapshot;
                    return mgr;
                }
            }
        }

        // Fall back to the configured tier
        if let Some(tier) = config_tier {
            *mgr.state.write().unwrap() = SubscriptionSnapshot {
                tier,
                selection: ModuleSelection::default(),
                claims: None,
                source: SubscriptionSource::ConfigFile,
                status: SubscriptionStatus::Valid,
            };
            return mgr;
        }

        // Default: Free
        *mgr.state.write().unwrap() = SubscriptionSnapshot {
            tier: SubscriptionTier::Free,
            selection: ModuleSelection::default(),
            claims: None,
            source: SubscriptionSource::Default,
            status: SubscriptionStatus::Valid,
        };

        mgr
    }

    /// Check module access under the current snapshot.
    pub fn check_module(&self, table: &EntitlementTable, name: &str) -> ModuleAccess {
        let state = self.state.read().unwrap();

        let accessible = resolver::has_module_access(table, state.tier, &state.selection, name);

        // Grace period: keep modules that were available before expiry.
        if let SubscriptionStatus::GracePeriod { days_remaining } = &state.status {
            if accessible {
                return ModuleAccess::GracePeriod {
                    module: name.to_string(),
                    days_remaining: *days_remaining,
                };
            }
        }

        if accessible {
            ModuleAccess::Allowed
        } else {
            ModuleAccess::Denied {
                module: name.to_string(),
                required_tier: table.min_tier_for(name),
                current_tier: state.tier,
                monthly_price_cents: table.module_price_cents(name),
                upgrade_url: self.upgrade_url.clone(),
            }
        }
    }

    /// Effective modules for the current snapshot.
    pub fn available_modules(&self, table: &EntitlementTable) -> Vec<String> {
        let state = self.state.read().unwrap();
        resolver::available_modules(table, state.tier, &state.selection)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Incremental add-on cost for the current snapshot, in cents.
    pub fn monthly_cost_cents(&self, table: &EntitlementTable) -> u64 {
        let state = self.state.read().unwrap();
        resolver::monthly_cost_cents(table, state.tier, &state.selection)
    }

    /// Read-only snapshot of the current subscription.
    pub fn snapshot(&self) -> SubscriptionSnapshot {
        self.state.read().unwrap().clone()
    }

    /// The current tier.
    pub fn tier(&self) -> SubscriptionTier {
        self.state.read().unwrap().tier
    }

    /// Hot-reload: re-read the token file and swap the snapshot.
    /// Called when billing rotates the token (file watcher or explicit).
    pub fn reload(&self) -> Result<(), TokenError> {
        let path = self.token_path.as_ref().ok_or(TokenError::NoTokenPath)?;
        let snapshot = self.load_from_token_file(path)?;

        info!(tier = snapshot.tier.as_str(), "Subscription reloaded");

        *self.state.write().unwrap() = snapshot;
        Ok(())
    }

    fn load_from_token_file(&self, path: &Path) -> Result<SubscriptionSnapshot, TokenError> {
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.load_from_token_string(&content, SubscriptionSource::TokenFile(path.to_path_buf()))
    }

    fn load_from_token_string(
        &self,
        raw: &str,
        source: SubscriptionSource,
    ) -> Result<SubscriptionSnapshot, TokenError> {
        let claims = token::parse_token(raw)?;

        let tier = SubscriptionTier::parse(&claims.tier).unwrap_or(SubscriptionTier::Free);
        let selection = ModuleSelection::with_addons(claims.addons.iter().cloned());

        let status = match token::validate_claims(&claims) {
            Ok(()) => SubscriptionStatus::Valid,
            Err(TokenError::Expired { .. }) => {
                if token::is_in_grace_period(&claims, GRACE_PERIOD_DAYS) {
                    let grace_end = claims.exp + GRACE_PERIOD_DAYS * 86_400;
                    let days_remaining =
                        grace_end.saturating_sub(token::current_unix_time()) / 86_400;
                    warn!(
                        days_remaining,
                        "Subscription expired but within grace period"
                    );
                    SubscriptionStatus::GracePeriod { days_remaining }
                } else {
                    warn!("Subscription expired and past grace period — downgrading to Free");
                    return Ok(SubscriptionSnapshot {
                        tier: SubscriptionTier::Free,
                        selection: ModuleSelection::default(),
                        claims: Some(claims),
                        source,
                        status: SubscriptionStatus::Expired,
                    });
                }
            }
            Err(e) => {
                return Ok(SubscriptionSnapshot {
                    tier: SubscriptionTier::Free,
                    selection: ModuleSelection::default(),
                    claims: Some(claims),
                    source,
                    status: SubscriptionStatus::Invalid(e.to_string()),
                });
            }
        };

        Ok(SubscriptionSnapshot {
            tier,
            selection,
            claims: Some(claims),
            source,
            status,
        })
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}
