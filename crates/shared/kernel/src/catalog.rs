//! Static description of every capability module the extension ships.

use crate::error::KernelError;
use crate::settings::{Definition, Settings};
use fxhash::FxHashSet;
use std::fmt;
use xrv_domain::phase::Phase;
use xrv_domain::registry::ModuleFactory;
use xrv_domain::settings::SettingDecl;

/// One-time setup run after a group has been published. Returns the settings it defined.
pub type GroupSetup = fn(&mut Settings<'_>) -> Vec<(&'static str, Definition)>;

/// How a module becomes visible in the singleton namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    /// Published in Scene when the named group flag is enabled.
    Gated(&'static str),
    /// Published in Scene unconditionally.
    AlwaysOn,
    /// Registered and instantiated, never published.
    Unexposed,
}

/// A module's registration phase, exposure and constructor.
#[derive(Clone, Copy)]
pub struct ModuleEntry {
    pub name: &'static str,
    pub base: &'static str,
    pub register_at: Phase,
    pub exposure: Exposure,
    pub factory: ModuleFactory,
}

/// A flag that publishes its member modules as a unit.
#[derive(Clone, Copy)]
pub struct GateGroup {
    pub flag: &'static str,
    pub setup: Option<GroupSetup>,
}

/// An editor-only class, optionally attached as an editor plugin.
#[derive(Clone, Copy)]
pub struct ToolingEntry {
    pub name: &'static str,
    pub base: &'static str,
    pub factory: ModuleFactory,
    pub plugin: bool,
}

/// The complete, build-time table driving an [`crate::context::ExtensionContext`].
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    /// Defined in Core, before any module is registered.
    pub core_settings: &'static [SettingDecl],
    /// Defined in Scene, before any gate is evaluated.
    pub scene_settings: &'static [SettingDecl],
    pub groups: &'static [GateGroup],
    pub modules: &'static [ModuleEntry],
    pub tooling: &'static [ToolingEntry],
}

impl Catalog {
    pub const EMPTY: Self = Self {
        core_settings: &[],
        scene_settings: &[],
        groups: &[],
        modules: &[],
        tooling: &[],
    };

    #[must_use]
    pub fn module(&self, name: &str) -> Option<&'static ModuleEntry> {
        self.modules.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn group(&self, flag: &str) -> Option<&'static GateGroup> {
        self.groups.iter().find(|group| group.flag == flag)
    }

    /// Members of a group, in catalog order.
    pub fn members<'a>(
        &self,
        flag: &'a str,
    ) -> impl Iterator<Item = &'static ModuleEntry> + use<'a> {
        let modules = self.modules;
        modules
            .iter()
            .filter(move |entry| matches!(entry.exposure, Exposure::Gated(gate) if gate == flag))
    }

    pub fn registered_at(&self, phase: Phase) -> impl Iterator<Item = &'static ModuleEntry> {
        let modules = self.modules;
        modules.iter().filter(move |entry| entry.register_at == phase)
    }

    /// Modules published without a gate.
    pub fn always_on(&self) -> impl Iterator<Item = &'static ModuleEntry> {
        let modules = self.modules;
        modules.iter().filter(|entry| entry.exposure == Exposure::AlwaysOn)
    }

    /// Checks the table for inconsistencies the dispatcher cannot recover from.
    ///
    /// # Errors
    /// Returns [`KernelError::Catalog`] describing the first problem found.
    pub fn validate(&self) -> Result<(), KernelError> {
        let mut names = FxHashSet::default();
        for name in self.modules.iter().map(|m| m.name).chain(self.tooling.iter().map(|t| t.name)) {
            if !names.insert(name) {
                return Err(invalid(format!("duplicate class `{name}`")));
            }
        }

        let mut paths = FxHashSet::default();
        for decl in self.core_settings.iter().chain(self.scene_settings) {
            if !paths.insert(decl.path) {
                return Err(invalid(format!("setting `{}` declared twice", decl.path)));
            }
            if !decl.default.matches(decl.kind) {
                return Err(invalid(format!("setting `{}` default does not match its kind", decl.path)));
            }
        }

        let mut flags = FxHashSet::default();
        for group in self.groups {
            if !flags.insert(group.flag) {
                return Err(invalid(format!("group `{}` declared twice", group.flag)));
            }
            if !paths.contains(group.flag) {
                return Err(invalid(format!("group flag `{}` is never defined", group.flag)));
            }
            if self.members(group.flag).next().is_none() {
                return Err(invalid(format!("group `{}` has no members", group.flag)));
            }
        }

        for entry in self.modules {
            if !matches!(entry.register_at, Phase::Core | Phase::Scene) {
                return Err(invalid(format!(
                    "module `{}` registers at {}, expected core or scene",
                    entry.name, entry.register_at
                )));
            }
            if let Exposure::Gated(flag) = entry.exposure
                && !flags.contains(flag)
            {
                return Err(invalid(format!("module `{}` references unknown group `{flag}`", entry.name)));
            }

            let built = (entry.factory)();
            if built.name() != entry.name {
                return Err(invalid(format!(
                    "entry `{}` builds a module named `{}`",
                    entry.name,
                    built.name()
                )));
            }
        }

        for tool in self.tooling {
            let built = (tool.factory)();
            if built.name() != tool.name {
                return Err(invalid(format!(
                    "tooling `{}` builds a class named `{}`",
                    tool.name,
                    built.name()
                )));
            }
        }

        Ok(())
    }
}

/// Builds a [`ModuleEntry`] from a `#[capability_module]` type.
///
/// ```rust,ignore
/// module_entry!(FbPassthrough, Core, Exposure::Gated(FB_PASSTHROUGH))
/// ```
#[macro_export]
macro_rules! module_entry {
    ($module:ty, $phase:ident, $exposure:expr $(,)?) => {
        $crate::catalog::ModuleEntry {
            name: <$module>::NAME,
            base: <$module>::BASE,
            register_at: $crate::domain::phase::Phase::$phase,
            exposure: $exposure,
            factory: <$module>::create,
        }
    };
}

/// Builds a [`ToolingEntry`]; pass `plugin` to attach it as an editor plugin.
#[macro_export]
macro_rules! tooling_entry {
    ($module:ty, plugin $(,)?) => {
        $crate::catalog::ToolingEntry {
            name: <$module>::NAME,
            base: <$module>::BASE,
            factory: <$module>::create,
            plugin: true,
        }
    };
    ($module:ty $(,)?) => {
        $crate::catalog::ToolingEntry {
            name: <$module>::NAME,
            base: <$module>::BASE,
            factory: <$module>::create,
            plugin: false,
        }
    };
}

fn invalid(message: String) -> KernelError {
    KernelError::Catalog { message: message.into(), context: None }
}

impl fmt::Debug for ModuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleEntry")
            .field("name", &self.name)
            .field("base", &self.base)
            .field("register_at", &self.register_at)
            .field("exposure", &self.exposure)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for GateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateGroup")
            .field("flag", &self.flag)
            .field("setup", &self.setup.is_some())
            .finish()
    }
}

impl fmt::Debug for ToolingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolingEntry")
            .field("name", &self.name)
            .field("base", &self.base)
            .field("plugin", &self.plugin)
            .finish_non_exhaustive()
    }
}
