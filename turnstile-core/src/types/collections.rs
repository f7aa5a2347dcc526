//! Hash collections using rustc-hash's Fx hasher.
//! Entitlement lookups sit on every render path; keys are short,
//! trusted strings.

pub use rustc_hash::{FxHashMap, FxHashSet};
