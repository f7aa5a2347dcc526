//! # turnstile-core
//!
//! Foundation crate for the Turnstile entitlement engine.
//! Defines subscription tiers, the module catalog, roles, permission
//! tokens, errors, and configuration. Every other crate in the workspace
//! depends on this.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod identity;
pub mod telemetry;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use catalog::{EntitlementTable, ModuleDef, SubscriptionTier};
pub use config::{EntitlementConfig, GateConfig, UnconstrainedGate};
pub use errors::{ConfigError, ConfigResult, ErrorCode};
pub use identity::{capabilities_for_role, Permission, PermissionSet, Role};
pub use types::collections::{FxHashMap, FxHashSet};
