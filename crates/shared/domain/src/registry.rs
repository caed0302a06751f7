//! Capability module contract.
//! Modules are type-erased behind `Arc<dyn CapabilityModule>` so the registry can own,
//! publish and release them without knowing their concrete types.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// A unit implementing one optional feature, addressable by a stable name.
///
/// Implementations are normally generated by `#[xrv_derive::capability_module]`.
pub trait CapabilityModule: Any + Debug + Send + Sync {
    /// Canonical class name, also used as the published singleton name.
    fn name(&self) -> &'static str;

    /// Host base class the module derives from.
    fn base_class(&self) -> &'static str {
        "Object"
    }

    /// `OpenXR` extensions this module asks the runtime for. Empty for plain data holders.
    fn extensions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// Constructs a fresh module instance.
pub type ModuleFactory = fn() -> Arc<dyn CapabilityModule>;

/// Returns `true` when both handles point to the same module instance.
#[must_use]
pub fn same_instance(a: &Arc<dyn CapabilityModule>, b: &Arc<dyn CapabilityModule>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
