//! Access resolver — effective module access and incremental cost for an
//! employer subscription snapshot. Pure functions over the entitlement
//! table; evaluated fresh on every check.

mod access;
mod selection;

pub use access::{available_modules, has_module_access, monthly_cost_cents};
pub use selection::ModuleSelection;
