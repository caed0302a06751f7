//! The phase dispatcher.
//!
//! An [`ExtensionContext`] owns every module instance it creates and remembers, per phase,
//! exactly what it handed to the host. Terminating a phase replays that ledger backwards, so a
//! full [`ExtensionContext::shutdown`] leaves the host as it found it, apart from settings,
//! which persist across runs.

use crate::catalog::{Catalog, GateGroup, ModuleEntry, ToolingEntry};
use crate::gate::{ActivationGate, GateDecision};
use crate::host::{ClassInfo, Host};
use crate::settings::{Definition, Settings};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use xrv_domain::phase::{Phase, PhaseSet};
use xrv_domain::registry::CapabilityModule;
use xrv_domain::settings::SettingDecl;

/// What [`ExtensionContext::on_phase`] did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    #[default]
    Applied,
    /// The phase already ran; nothing was repeated.
    AlreadyCompleted,
    /// A later phase already ran; the request was ignored.
    OutOfOrder,
    /// The context has started tearing down and accepts no more work.
    Terminated,
    /// Teardown requested for a phase that never ran.
    NotCompleted,
}

/// Result of evaluating one group gate in Scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOutcome {
    pub flag: &'static str,
    pub decision: GateDecision,
    pub published: bool,
}

/// Everything a single phase changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub status: Status,
    pub settings: Vec<(&'static str, Definition)>,
    pub registered: Vec<&'static str>,
    pub wrappers: Vec<&'static str>,
    pub published: Vec<&'static str>,
    pub groups: Vec<GroupOutcome>,
    pub plugins: Vec<&'static str>,
    /// Steps skipped because a collaborator was missing or refused.
    pub degraded: Vec<String>,
}

impl PhaseReport {
    fn new(phase: Phase, status: Status) -> Self {
        Self {
            phase,
            status,
            settings: Vec::new(),
            registered: Vec::new(),
            wrappers: Vec::new(),
            published: Vec::new(),
            groups: Vec::new(),
            plugins: Vec::new(),
            degraded: Vec::new(),
        }
    }

    /// Groups whose gate kept them hidden, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = &GroupOutcome> {
        self.groups.iter().filter(|outcome| !outcome.published)
    }

    fn degrade(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(phase = %self.phase, %reason, "Phase step skipped");
        self.degraded.push(reason);
    }
}

/// Everything a single teardown undid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeardownReport {
    pub phase: Phase,
    pub status: Status,
    pub unpublished: Vec<&'static str>,
    pub unregistered: Vec<&'static str>,
    pub wrappers: Vec<&'static str>,
    pub plugins: Vec<&'static str>,
    pub released: usize,
}

impl TeardownReport {
    const fn new(phase: Phase, status: Status) -> Self {
        Self {
            phase,
            status,
            unpublished: Vec::new(),
            unregistered: Vec::new(),
            wrappers: Vec::new(),
            plugins: Vec::new(),
            released: 0,
        }
    }
}

/// What one phase handed to the host, replayed backwards on teardown.
#[derive(Debug, Default)]
struct Ledger {
    classes: Vec<&'static str>,
    wrappers: Vec<&'static str>,
    published: Vec<&'static str>,
    plugins: Vec<&'static str>,
    instances: Vec<&'static str>,
}

/// Owns module instances and drives the phase state machine for one extension load.
#[derive(Debug)]
pub struct ExtensionContext {
    catalog: &'static Catalog,
    instances: BTreeMap<&'static str, Arc<dyn CapabilityModule>>,
    completed: PhaseSet,
    ledgers: BTreeMap<Phase, Ledger>,
    terminating: bool,
}

impl ExtensionContext {
    #[must_use]
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            instances: BTreeMap::new(),
            completed: PhaseSet::empty(),
            ledgers: BTreeMap::new(),
            terminating: false,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn completed(&self) -> PhaseSet {
        self.completed
    }

    #[must_use]
    pub fn current_phase(&self) -> Option<Phase> {
        self.completed.highest()
    }

    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.terminating
    }

    /// The instance this context owns for `name`, if it has been created.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<Arc<dyn CapabilityModule>> {
        self.instances.get(name).cloned()
    }

    /// Names this context published, in publication order.
    #[must_use]
    pub fn published(&self) -> Vec<&'static str> {
        self.ledgers.values().flat_map(|ledger| ledger.published.iter().copied()).collect()
    }

    /// Runs the actions of `phase` once.
    ///
    /// Repeated phases, phases earlier than the latest completed one and any phase after
    /// teardown began are ignored and reported through [`PhaseReport::status`]. Skipping
    /// forward is allowed.
    #[instrument(skip(self, host), fields(phase = %phase))]
    pub fn on_phase(&mut self, phase: Phase, host: &mut dyn Host) -> PhaseReport {
        if self.terminating {
            warn!("Context is terminated, ignoring phase");
            return PhaseReport::new(phase, Status::Terminated);
        }
        if self.completed.has(phase) {
            debug!("Phase already completed");
            return PhaseReport::new(phase, Status::AlreadyCompleted);
        }
        if self.current_phase().is_some_and(|current| current > phase) {
            warn!(current = ?self.current_phase(), "Phase arrived out of order, ignoring");
            return PhaseReport::new(phase, Status::OutOfOrder);
        }

        info!("Entering phase");
        let mut report = PhaseReport::new(phase, Status::Applied);
        match phase {
            Phase::Core => self.run_core(host, &mut report),
            Phase::Scene => self.run_scene(host, &mut report),
            Phase::Editor => self.run_editor(host, &mut report),
            Phase::Servers | Phase::Max => {},
        }
        self.completed |= phase.flag();

        info!(
            registered = report.registered.len(),
            published = report.published.len(),
            degraded = report.degraded.len(),
            "Phase completed"
        );
        report
    }

    /// Undoes everything `phase` did. Later phases must be torn down first.
    #[instrument(skip(self, host), fields(phase = %phase))]
    pub fn on_terminate(&mut self, phase: Phase, host: &mut dyn Host) -> TeardownReport {
        if !self.completed.has(phase) {
            debug!("Phase never ran, nothing to tear down");
            return TeardownReport::new(phase, Status::NotCompleted);
        }
        if self.current_phase().is_some_and(|current| current > phase) {
            warn!(current = ?self.current_phase(), "Later phase still active, ignoring teardown");
            return TeardownReport::new(phase, Status::OutOfOrder);
        }

        self.terminating = true;
        let mut report = TeardownReport::new(phase, Status::Applied);
        let ledger = self.ledgers.remove(&phase).unwrap_or_default();

        if !ledger.plugins.is_empty() {
            match host.editor_plugins() {
                Some(plugins) => {
                    for &name in ledger.plugins.iter().rev() {
                        if plugins.remove_plugin(name) {
                            report.plugins.push(name);
                        }
                    }
                },
                None => warn!("Editor plugin registry unavailable, plugins left attached"),
            }
        }

        if !ledger.published.is_empty() {
            match host.singletons() {
                Some(namespace) => {
                    for &name in ledger.published.iter().rev() {
                        if namespace.unregister_singleton(name).is_some() {
                            report.unpublished.push(name);
                        }
                    }
                },
                None => warn!("Singleton namespace unavailable, singletons left published"),
            }
        }

        if !ledger.wrappers.is_empty() {
            match host.xr_runtime() {
                Some(runtime) => {
                    for &name in ledger.wrappers.iter().rev() {
                        if runtime.unregister_extension_wrapper(name) {
                            report.wrappers.push(name);
                        }
                    }
                },
                None => warn!("XR runtime unavailable, extension wrappers left registered"),
            }
        }

        let classes = host.classes();
        for &name in ledger.classes.iter().rev() {
            if classes.unregister_class(name) {
                report.unregistered.push(name);
            }
        }

        for name in &ledger.instances {
            if self.instances.remove(name).is_some() {
                report.released += 1;
            }
        }

        self.completed.remove(phase.flag());
        info!(
            unpublished = report.unpublished.len(),
            unregistered = report.unregistered.len(),
            released = report.released,
            "Phase torn down"
        );
        report
    }

    /// Tears down every completed phase, latest first, and refuses further phases.
    pub fn shutdown(&mut self, host: &mut dyn Host) -> Vec<TeardownReport> {
        let reports: Vec<_> =
            self.completed.descending().map(|phase| self.on_terminate(phase, host)).collect();
        self.terminating = true;
        self.instances.clear();
        self.ledgers.clear();
        info!(phases = reports.len(), "Extension context shut down");
        reports
    }

    fn run_core(&mut self, host: &mut dyn Host, report: &mut PhaseReport) {
        let catalog = self.catalog;
        define_all(catalog.core_settings, host, report);

        for entry in catalog.registered_at(Phase::Core) {
            self.register(entry, Phase::Core, host, report);
        }
    }

    fn run_scene(&mut self, host: &mut dyn Host, report: &mut PhaseReport) {
        let catalog = self.catalog;
        if !self.completed.has(Phase::Core) {
            warn!("Core phase never ran, registering core modules during scene");
            define_all(catalog.core_settings, host, report);
            for entry in catalog.registered_at(Phase::Core) {
                self.register(entry, Phase::Scene, host, report);
            }
        }
        define_all(catalog.scene_settings, host, report);

        for entry in catalog.registered_at(Phase::Scene) {
            self.register(entry, Phase::Scene, host, report);
        }

        let decisions: Vec<(&'static GateGroup, GateDecision)> = {
            let settings = Settings::new(host.settings());
            let gate = ActivationGate::new(&settings);
            catalog.groups.iter().map(|group| (group, gate.evaluate(group.flag))).collect()
        };

        for (group, decision) in decisions {
            let published = decision.is_enabled() && self.publish_group(group, host, report);
            debug!(flag = group.flag, %decision, published, "Evaluated gate");
            report.groups.push(GroupOutcome { flag: group.flag, decision, published });

            if published && let Some(setup) = group.setup {
                let mut settings = Settings::new(host.settings());
                report.settings.extend(setup(&mut settings));
            }
        }

        for entry in catalog.always_on() {
            self.publish(&[entry], Phase::Scene, host, report);
        }
    }

    fn run_editor(&mut self, host: &mut dyn Host, report: &mut PhaseReport) {
        if !host.is_editor() {
            info!("Not running in the editor, skipping editor tooling");
            return;
        }

        for tool in self.catalog.tooling {
            self.register_tool(tool, host, report);
        }
    }

    /// Registers the module's class, creates its instance and hands any requested `OpenXR`
    /// extensions to the runtime.
    fn register(
        &mut self,
        entry: &'static ModuleEntry,
        phase: Phase,
        host: &mut dyn Host,
        report: &mut PhaseReport,
    ) {
        let info = ClassInfo { name: entry.name, base: entry.base, constructor: entry.factory };
        if host.classes().register_class(info) {
            self.ledger(phase).classes.push(entry.name);
            report.registered.push(entry.name);
        } else {
            debug!(module = entry.name, "Class already registered");
        }

        let module = self.instance(entry, phase);
        let extensions = module.extensions();
        if extensions.is_empty() {
            return;
        }

        match host.xr_runtime() {
            Some(runtime) => {
                runtime.register_extension_wrapper(entry.name, extensions);
                self.ledger(phase).wrappers.push(entry.name);
                report.wrappers.push(entry.name);
                debug!(module = entry.name, ?extensions, "Registered extension wrapper");
            },
            None => report.degrade(format!(
                "XR runtime unavailable, `{}` not registered as wrapper",
                entry.name
            )),
        }
    }

    fn register_tool(
        &mut self,
        tool: &'static ToolingEntry,
        host: &mut dyn Host,
        report: &mut PhaseReport,
    ) {
        let info = ClassInfo { name: tool.name, base: tool.base, constructor: tool.factory };
        if host.classes().register_class(info) {
            self.ledger(Phase::Editor).classes.push(tool.name);
            report.registered.push(tool.name);
        }
        if !tool.plugin {
            return;
        }

        match host.editor_plugins() {
            Some(plugins) => {
                if plugins.add_plugin(tool.name) {
                    self.ledger(Phase::Editor).plugins.push(tool.name);
                    report.plugins.push(tool.name);
                }
            },
            None => report.degrade(format!(
                "Editor plugin registry unavailable, `{}` not attached",
                tool.name
            )),
        }
    }

    /// Publishes a gated group as a unit.
    fn publish_group(
        &mut self,
        group: &'static GateGroup,
        host: &mut dyn Host,
        report: &mut PhaseReport,
    ) -> bool {
        let members: Vec<&'static ModuleEntry> = self.catalog.members(group.flag).collect();
        self.publish(&members, Phase::Scene, host, report)
    }

    /// Publishes every entry or none of them, creating missing instances first.
    fn publish(
        &mut self,
        entries: &[&'static ModuleEntry],
        phase: Phase,
        host: &mut dyn Host,
        report: &mut PhaseReport,
    ) -> bool {
        if entries.is_empty() {
            return true;
        }
        let modules: Vec<_> =
            entries.iter().map(|&entry| (entry.name, self.instance(entry, phase))).collect();

        let Some(namespace) = host.singletons() else {
            report.degrade("Singleton namespace unavailable, nothing published");
            return false;
        };

        let mut done: Vec<&'static str> = Vec::with_capacity(modules.len());
        for (name, module) in modules {
            if let Err(err) = namespace.register_singleton(name, module) {
                for published in done.iter().rev() {
                    namespace.unregister_singleton(published);
                }
                report.degrade(format!("{err}; rolled back {} singleton(s)", done.len()));
                return false;
            }
            done.push(name);
        }

        debug!(modules = ?done, "Published singletons");
        report.published.extend(&done);
        self.ledger(phase).published.extend(done);
        true
    }

    /// Returns the owned instance for `entry`, creating it on first use.
    fn instance(
        &mut self,
        entry: &'static ModuleEntry,
        phase: Phase,
    ) -> Arc<dyn CapabilityModule> {
        if let Some(existing) = self.instances.get(entry.name) {
            return Arc::clone(existing);
        }

        let module = (entry.factory)();
        self.instances.insert(entry.name, Arc::clone(&module));
        self.ledger(phase).instances.push(entry.name);
        module
    }

    fn ledger(&mut self, phase: Phase) -> &mut Ledger {
        self.ledgers.entry(phase).or_default()
    }
}

fn define_all(decls: &[SettingDecl], host: &mut dyn Host, report: &mut PhaseReport) {
    if decls.is_empty() {
        return;
    }

    let mut settings = Settings::new(host.settings());
    if !settings.is_available() {
        report.degrade(format!("Settings store unavailable, {} setting(s) not defined", decls.len()));
        return;
    }

    for decl in decls {
        let outcome = settings.define(decl);
        report.settings.push((decl.path, outcome));
    }
}
