//! Subscription state — billing-issued entitlement tokens and the
//! hot-reloadable manager that turns them into module access decisions.
//!
//! ## Components
//! - **token** — entitlement token parsing and claim validation
//! - **manager** — SubscriptionManager: load, check, hot-reload

pub mod manager;
pub mod token;

pub use manager::{
    ModuleAccess, SubscriptionManager, SubscriptionSnapshot, SubscriptionSource,
    SubscriptionStatus,
};
pub use token::{EntitlementClaims, TokenError};
