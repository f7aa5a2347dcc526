//! User identity — roles, permission tokens, and capability resolution.
//!
//! Identity is owned by the host's auth/session provider; this module
//! only defines the closed role set, the permission token registry, and
//! the one table mapping roles to granted tokens.

pub mod capabilities;
pub mod permission;
pub mod role;

pub use capabilities::{capabilities_for_role, capability_map, capability_map_with_grants};
pub use permission::{is_registered, tokens, Permission, PermissionSet};
pub use role::Role;
