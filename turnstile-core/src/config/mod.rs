//! Configuration types.

pub mod entitlement_config;

pub use entitlement_config::{
    EntitlementConfig, GateConfig, UnconstrainedGate, DEFAULT_UPGRADE_URL,
};
