#![allow(dead_code, unreachable_pub)]

use xrv_kernel::catalog::{Catalog, Exposure, GateGroup, ModuleEntry, ToolingEntry};
use xrv_kernel::settings::{Definition, Settings};
use xrv_kernel::{module_entry, tooling_entry};
use xrv_kernel::domain::settings::SettingDecl;

pub const SOLO: &str = "xr/test/solo";
pub const PAIR: &str = "xr/test/pair";
pub const HOOKED: &str = "xr/test/hooked";
pub const HOOK_SETTING: &str = "xr/test/hooked/extra";
pub const TUNING: &str = "xr/test/tuning";

#[xrv_derive::capability_module(name = "SoloWrapper", base = "ExtensionWrapper", extensions = ["XR_TEST_solo"])]
pub struct SoloWrapper;

#[xrv_derive::capability_module(name = "PairLeft", base = "ExtensionWrapper", extensions = ["XR_TEST_pair"])]
pub struct PairLeft;

#[xrv_derive::capability_module(name = "PairRight", base = "ExtensionWrapper", extensions = ["XR_TEST_pair"])]
pub struct PairRight;

#[xrv_derive::capability_module(name = "HookedWrapper", base = "ExtensionWrapper", extensions = ["XR_TEST_hooked"])]
pub struct HookedWrapper;

#[xrv_derive::capability_module(name = "HiddenWrapper", base = "ExtensionWrapper", extensions = ["XR_TEST_hidden"])]
pub struct HiddenWrapper;

#[xrv_derive::capability_module(name = "DataHolder", base = "Node3D")]
pub struct DataHolder;

#[xrv_derive::capability_module(name = "ExportTool", base = "EditorExportPlugin")]
pub struct ExportTool;

#[xrv_derive::capability_module(name = "EditorTool", base = "EditorPlugin")]
pub struct EditorTool;

fn hook(settings: &mut Settings<'_>) -> Vec<(&'static str, Definition)> {
    vec![(HOOK_SETTING, settings.define(&SettingDecl::flag(HOOK_SETTING, false)))]
}

pub static CORE_SETTINGS: [SettingDecl; 3] =
    [SettingDecl::flag(SOLO, true), SettingDecl::flag(PAIR, true), SettingDecl::flag(HOOKED, true)];

pub static SCENE_SETTINGS: [SettingDecl; 1] = [SettingDecl::float(TUNING, 0.1)];

pub static GROUPS: [GateGroup; 3] = [
    GateGroup { flag: SOLO, setup: None },
    GateGroup { flag: PAIR, setup: None },
    GateGroup { flag: HOOKED, setup: Some(hook) },
];

pub static MODULES: [ModuleEntry; 6] = [
    module_entry!(SoloWrapper, Core, Exposure::Gated(SOLO)),
    module_entry!(PairLeft, Core, Exposure::Gated(PAIR)),
    module_entry!(PairRight, Core, Exposure::Gated(PAIR)),
    module_entry!(HookedWrapper, Core, Exposure::Gated(HOOKED)),
    module_entry!(HiddenWrapper, Core, Exposure::Unexposed),
    module_entry!(DataHolder, Scene, Exposure::AlwaysOn),
];

pub static TOOLING: [ToolingEntry; 2] = [tooling_entry!(ExportTool), tooling_entry!(EditorTool, plugin)];

pub static CATALOG: Catalog = Catalog {
    core_settings: &CORE_SETTINGS,
    scene_settings: &SCENE_SETTINGS,
    groups: &GROUPS,
    modules: &MODULES,
    tooling: &TOOLING,
};
