//! # turnstile-engine
//!
//! Entitlement engine for the Turnstile workspace.
//! Contains the access resolver, the permission gate, and the
//! subscription manager. All evaluation is synchronous and pure over
//! snapshots owned by the host's auth and billing providers.

pub mod gate;
pub mod resolver;
pub mod subscription;

// Re-export the most commonly used items.
pub use gate::{
    has_all_permissions, has_any_permission, has_permission, resolve_gate, GateOptions,
};
pub use resolver::{available_modules, has_module_access, monthly_cost_cents, ModuleSelection};
pub use subscription::{
    EntitlementClaims, ModuleAccess, SubscriptionManager, SubscriptionSnapshot,
    SubscriptionSource, SubscriptionStatus, TokenError,
};
