//! Subscription catalog — tiers, module definitions, and the
//! entitlement table.
//!
//! ## Components
//! - **tier** — closed subscription tier enumeration
//! - **module** — module definitions (name, label, price, tier inclusion)
//! - **table** — immutable, validated entitlement table

pub mod module;
pub mod table;
pub mod tier;

pub use module::ModuleDef;
pub use table::EntitlementTable;
pub use tier::SubscriptionTier;
