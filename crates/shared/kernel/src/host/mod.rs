//! Engine collaborators the dispatcher talks to.
//!
//! Every collaborator except the class registry may be missing; the dispatcher skips the
//! affected step and logs instead of failing.

pub mod local;

use crate::error::KernelError;
use std::fmt::Debug;
use std::sync::Arc;
use xrv_domain::registry::{CapabilityModule, ModuleFactory};
use xrv_settings::SettingsStore;

/// Class metadata handed to the engine's class database.
#[derive(Debug, Clone, Copy)]
pub struct ClassInfo {
    pub name: &'static str,
    pub base: &'static str,
    pub constructor: ModuleFactory,
}

/// Global singleton namespace.
pub trait SingletonNamespace: Debug {
    /// Publishes `module` under `name`.
    ///
    /// # Errors
    /// Returns [`KernelError::DuplicateSingleton`] if the name is taken.
    fn register_singleton(
        &mut self,
        name: &'static str,
        module: Arc<dyn CapabilityModule>,
    ) -> Result<(), KernelError>;

    fn unregister_singleton(&mut self, name: &str) -> Option<Arc<dyn CapabilityModule>>;

    fn singleton(&self, name: &str) -> Option<Arc<dyn CapabilityModule>>;

    fn has_singleton(&self, name: &str) -> bool {
        self.singleton(name).is_some()
    }

    /// Published names, sorted.
    fn names(&self) -> Vec<&'static str>;
}

/// Engine class database.
pub trait ClassRegistry: Debug {
    /// Registers a class. Returns `false` and changes nothing if the name is already known.
    fn register_class(&mut self, info: ClassInfo) -> bool;

    fn unregister_class(&mut self, name: &str) -> bool;

    fn is_registered(&self, name: &str) -> bool;

    /// Constructs a fresh, unpublished instance of a registered class.
    ///
    /// # Errors
    /// Returns [`KernelError::UnknownClass`] if no such class is registered.
    fn instantiate(&self, name: &str) -> Result<Arc<dyn CapabilityModule>, KernelError>;

    /// Registered names, sorted.
    fn class_names(&self) -> Vec<&'static str>;
}

/// Editor plugin registry.
pub trait EditorPlugins: Debug {
    /// Attaches a plugin. Returns `false` if it was already attached.
    fn add_plugin(&mut self, name: &'static str) -> bool;

    fn remove_plugin(&mut self, name: &str) -> bool;

    fn plugins(&self) -> Vec<&'static str>;
}

/// The XR runtime's extension wrapper registry.
pub trait XrRuntime: Debug {
    fn register_extension_wrapper(&mut self, name: &'static str, extensions: &'static [&'static str]);

    fn unregister_extension_wrapper(&mut self, name: &str) -> bool;

    /// Union of the extensions requested by registered wrappers, sorted and deduplicated.
    fn requested_extensions(&self) -> Vec<&'static str>;
}

/// Everything the dispatcher needs from the host engine.
pub trait Host {
    fn settings(&mut self) -> Option<&mut dyn SettingsStore>;

    fn singletons(&mut self) -> Option<&mut dyn SingletonNamespace>;

    fn classes(&mut self) -> &mut dyn ClassRegistry;

    fn editor_plugins(&mut self) -> Option<&mut dyn EditorPlugins>;

    fn xr_runtime(&mut self) -> Option<&mut dyn XrRuntime>;

    /// `true` in the authoring environment, `false` in a deployed build.
    fn is_editor(&self) -> bool;
}
