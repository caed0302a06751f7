//! An in-memory host used by the simulator binary and the test suites.

use super::{ClassInfo, ClassRegistry, EditorPlugins, Host, SingletonNamespace, XrRuntime};
use crate::error::KernelError;
use fxhash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use xrv_domain::registry::CapabilityModule;
use xrv_settings::{ProjectSettings, SettingsStore};

/// Singleton namespace.
#[derive(Debug, Default)]
pub struct Engine {
    singletons: FxHashMap<&'static str, Arc<dyn CapabilityModule>>,
}

impl SingletonNamespace for Engine {
    fn register_singleton(
        &mut self,
        name: &'static str,
        module: Arc<dyn CapabilityModule>,
    ) -> Result<(), KernelError> {
        if self.singletons.contains_key(name) {
            return Err(KernelError::DuplicateSingleton { name: name.into(), context: None });
        }
        debug!(name, "Registered singleton");
        self.singletons.insert(name, module);
        Ok(())
    }

    fn unregister_singleton(&mut self, name: &str) -> Option<Arc<dyn CapabilityModule>> {
        self.singletons.remove(name)
    }

    fn singleton(&self, name: &str) -> Option<Arc<dyn CapabilityModule>> {
        self.singletons.get(name).cloned()
    }

    fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.singletons.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Class database.
#[derive(Debug, Default)]
pub struct ClassDb {
    classes: BTreeMap<&'static str, ClassInfo>,
}

impl ClassDb {
    #[must_use]
    pub fn info(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }
}

impl ClassRegistry for ClassDb {
    fn register_class(&mut self, info: ClassInfo) -> bool {
        if self.classes.contains_key(info.name) {
            return false;
        }
        debug!(class = info.name, base = info.base, "Registered class");
        self.classes.insert(info.name, info);
        true
    }

    fn unregister_class(&mut self, name: &str) -> bool {
        self.classes.remove(name).is_some()
    }

    fn is_registered(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    fn instantiate(&self, name: &str) -> Result<Arc<dyn CapabilityModule>, KernelError> {
        let info = self
            .classes
            .get(name)
            .ok_or_else(|| KernelError::UnknownClass { name: name.to_owned().into(), context: None })?;
        Ok((info.constructor)())
    }

    fn class_names(&self) -> Vec<&'static str> {
        self.classes.keys().copied().collect()
    }
}

/// Editor plugin list, in attach order.
#[derive(Debug, Default)]
pub struct EditorPluginList {
    plugins: Vec<&'static str>,
}

impl EditorPlugins for EditorPluginList {
    fn add_plugin(&mut self, name: &'static str) -> bool {
        if self.plugins.contains(&name) {
            return false;
        }
        self.plugins.push(name);
        true
    }

    fn remove_plugin(&mut self, name: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| *plugin != name);
        before != self.plugins.len()
    }

    fn plugins(&self) -> Vec<&'static str> {
        self.plugins.clone()
    }
}

/// `OpenXR` extension wrapper registry.
#[derive(Debug, Default)]
pub struct OpenXrApi {
    wrappers: BTreeMap<&'static str, &'static [&'static str]>,
}

impl OpenXrApi {
    #[must_use]
    pub fn wrappers(&self) -> Vec<&'static str> {
        self.wrappers.keys().copied().collect()
    }
}

impl XrRuntime for OpenXrApi {
    fn register_extension_wrapper(&mut self, name: &'static str, extensions: &'static [&'static str]) {
        self.wrappers.insert(name, extensions);
    }

    fn unregister_extension_wrapper(&mut self, name: &str) -> bool {
        self.wrappers.remove(name).is_some()
    }

    fn requested_extensions(&self) -> Vec<&'static str> {
        let mut extensions: Vec<_> = self.wrappers.values().flat_map(|list| list.iter().copied()).collect();
        extensions.sort_unstable();
        extensions.dedup();
        extensions
    }
}

/// A complete in-memory host. Any optional collaborator can be removed to exercise the
/// degraded paths.
#[derive(Debug)]
pub struct LocalHost {
    pub settings: Option<ProjectSettings>,
    pub engine: Option<Engine>,
    pub class_db: ClassDb,
    pub editor_plugins: Option<EditorPluginList>,
    pub openxr: Option<OpenXrApi>,
    pub editor: bool,
}

impl LocalHost {
    /// An editor host with every collaborator available.
    #[must_use]
    pub fn new(settings: ProjectSettings) -> Self {
        Self {
            settings: Some(settings),
            engine: Some(Engine::default()),
            class_db: ClassDb::default(),
            editor_plugins: Some(EditorPluginList::default()),
            openxr: Some(OpenXrApi::default()),
            editor: true,
        }
    }

    /// A deployed build: no editor, no editor plugin registry.
    #[must_use]
    pub fn deployed(settings: ProjectSettings) -> Self {
        Self { editor: false, editor_plugins: None, ..Self::new(settings) }
    }

    #[must_use]
    pub fn without_settings(mut self) -> Self {
        self.settings = None;
        self
    }

    #[must_use]
    pub fn without_engine(mut self) -> Self {
        self.engine = None;
        self
    }

    #[must_use]
    pub fn without_openxr(mut self) -> Self {
        self.openxr = None;
        self
    }

    #[must_use]
    pub fn published(&self) -> Vec<&'static str> {
        self.engine.as_ref().map(SingletonNamespace::names).unwrap_or_default()
    }

    #[must_use]
    pub fn singleton(&self, name: &str) -> Option<Arc<dyn CapabilityModule>> {
        self.engine.as_ref()?.singleton(name)
    }

    #[must_use]
    pub fn plugins(&self) -> Vec<&'static str> {
        self.editor_plugins.as_ref().map(EditorPlugins::plugins).unwrap_or_default()
    }

    #[must_use]
    pub fn wrappers(&self) -> Vec<&'static str> {
        self.openxr.as_ref().map(OpenXrApi::wrappers).unwrap_or_default()
    }
}

impl Default for LocalHost {
    fn default() -> Self {
        Self::new(ProjectSettings::default())
    }
}

impl Host for LocalHost {
    fn settings(&mut self) -> Option<&mut dyn SettingsStore> {
        self.settings.as_mut().map(|settings| settings as &mut dyn SettingsStore)
    }

    fn singletons(&mut self) -> Option<&mut dyn SingletonNamespace> {
        self.engine.as_mut().map(|engine| engine as &mut dyn SingletonNamespace)
    }

    fn classes(&mut self) -> &mut dyn ClassRegistry {
        &mut self.class_db
    }

    fn editor_plugins(&mut self) -> Option<&mut dyn EditorPlugins> {
        self.editor_plugins.as_mut().map(|plugins| plugins as &mut dyn EditorPlugins)
    }

    fn xr_runtime(&mut self) -> Option<&mut dyn XrRuntime> {
        self.openxr.as_mut().map(|openxr| openxr as &mut dyn XrRuntime)
    }

    fn is_editor(&self) -> bool {
        self.editor
    }
}
