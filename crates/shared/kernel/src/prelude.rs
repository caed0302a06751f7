pub use crate::catalog::{Catalog, Exposure, GateGroup, ModuleEntry, ToolingEntry};
pub use crate::context::{ExtensionContext, GroupOutcome, PhaseReport, Status, TeardownReport};
pub use crate::error::KernelError;
pub use crate::gate::{ActivationGate, GateDecision};
pub use crate::host::local::LocalHost;
pub use crate::host::{ClassInfo, ClassRegistry, EditorPlugins, Host, SingletonNamespace, XrRuntime};
pub use crate::settings::{Definition, Settings};
pub use xrv_domain::phase::{Phase, PhaseSet};
pub use xrv_domain::registry::{CapabilityModule, ModuleFactory, same_instance};
pub use xrv_domain::settings::{SettingDecl, SettingValue};
pub use xrv_settings::{ProjectSettings, SettingsStore};
