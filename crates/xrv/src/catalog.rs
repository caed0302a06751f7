//! The extension's fixed module table.
//!
//! Every flag defaults to `true`. Flags without a group are read by the wrappers themselves
//! when the runtime negotiates extensions.

use xrv_domain::settings::SettingDecl;
use xrv_kernel::catalog::{Catalog, Exposure, GateGroup, ModuleEntry, ToolingEntry};
use xrv_kernel::module_entry;
#[cfg(feature = "editor")]
use xrv_kernel::tooling_entry;

#[cfg(feature = "htc")]
use xrv_htc::{HTC_FACIAL_TRACKING, HTC_PASSTHROUGH};
#[cfg(feature = "meta")]
use xrv_meta::flags::{
    COLLISION_SHAPE_2D_THICKNESS, COLLISION_SHAPE_2D_THICKNESS_DEFAULT, FB_BODY_TRACKING,
    FB_COMPOSITION_LAYER_ALPHA_BLEND, FB_COMPOSITION_LAYER_SECURE_CONTENT,
    FB_COMPOSITION_LAYER_SETTINGS, FB_FACE_TRACKING, FB_HAND_TRACKING_AIM,
    FB_HAND_TRACKING_CAPSULES, FB_HAND_TRACKING_MESH, FB_PASSTHROUGH, FB_RENDER_MODEL, FB_SCENE,
    FB_SCENE_CAPTURE, FB_SPATIAL,
};
#[cfg(feature = "meta")]
use xrv_meta::{nodes, wrappers};

/// Ask for Android runtime permissions at startup.
pub const AUTOMATICALLY_REQUEST_RUNTIME_PERMISSIONS: &str =
    "xr/openxr/extensions/automatically_request_runtime_permissions";

pub static CORE_SETTINGS: &[SettingDecl] = &[
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_BODY_TRACKING, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_COMPOSITION_LAYER_ALPHA_BLEND, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_COMPOSITION_LAYER_SECURE_CONTENT, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_COMPOSITION_LAYER_SETTINGS, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_FACE_TRACKING, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_HAND_TRACKING_AIM, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_HAND_TRACKING_CAPSULES, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_HAND_TRACKING_MESH, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_PASSTHROUGH, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_RENDER_MODEL, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_SCENE_CAPTURE, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_SCENE, true),
    #[cfg(feature = "meta")]
    SettingDecl::flag(FB_SPATIAL, true),
    #[cfg(feature = "htc")]
    SettingDecl::flag(HTC_FACIAL_TRACKING, true),
    #[cfg(feature = "htc")]
    SettingDecl::flag(HTC_PASSTHROUGH, true),
];

pub static SCENE_SETTINGS: &[SettingDecl] = &[
    SettingDecl::flag(AUTOMATICALLY_REQUEST_RUNTIME_PERMISSIONS, true),
    #[cfg(feature = "meta")]
    SettingDecl::float(COLLISION_SHAPE_2D_THICKNESS, COLLISION_SHAPE_2D_THICKNESS_DEFAULT),
];

/// Gates in publication order.
pub static GROUPS: &[GateGroup] = &[
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_PASSTHROUGH, setup: None },
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_RENDER_MODEL, setup: None },
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_SCENE_CAPTURE, setup: None },
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_SPATIAL, setup: None },
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_SCENE, setup: None },
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_HAND_TRACKING_AIM, setup: Some(wrappers::add_project_setting) },
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_HAND_TRACKING_CAPSULES, setup: None },
    #[cfg(feature = "meta")]
    GateGroup { flag: FB_COMPOSITION_LAYER_SETTINGS, setup: None },
    #[cfg(feature = "htc")]
    GateGroup { flag: HTC_FACIAL_TRACKING, setup: None },
    #[cfg(feature = "htc")]
    GateGroup { flag: HTC_PASSTHROUGH, setup: None },
];

/// Core registrations, in runtime negotiation order, followed by the Scene data holders.
pub static MODULES: &[ModuleEntry] = &[
    #[cfg(feature = "meta")]
    module_entry!(wrappers::Passthrough, Core, Exposure::Gated(FB_PASSTHROUGH)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::RenderModelWrapper, Core, Exposure::Gated(FB_RENDER_MODEL)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SceneCapture, Core, Exposure::Gated(FB_SCENE_CAPTURE)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntityWrapper, Core, Exposure::Gated(FB_SPATIAL)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntitySharing, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntityStorage, Core, Exposure::Gated(FB_SPATIAL)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntityStorageBatch, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntityQueryWrapper, Core, Exposure::Gated(FB_SPATIAL)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntityContainer, Core, Exposure::Gated(FB_SPATIAL)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntityUserWrapper, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::SpatialEntityMesh, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::Scene, Core, Exposure::Gated(FB_SCENE)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::FaceTracking, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::BodyTracking, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::HandTrackingMeshWrapper, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::HandTrackingAim, Core, Exposure::Gated(FB_HAND_TRACKING_AIM)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::HandTrackingCapsules, Core, Exposure::Gated(FB_HAND_TRACKING_CAPSULES)),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::CompositionLayerSecureContent, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(wrappers::CompositionLayerAlphaBlend, Core, Exposure::Unexposed),
    #[cfg(feature = "meta")]
    module_entry!(
        wrappers::CompositionLayerSettings,
        Core,
        Exposure::Gated(FB_COMPOSITION_LAYER_SETTINGS)
    ),
    #[cfg(feature = "htc")]
    module_entry!(xrv_htc::FacialTracking, Core, Exposure::Gated(HTC_FACIAL_TRACKING)),
    #[cfg(feature = "htc")]
    module_entry!(xrv_htc::Passthrough, Core, Exposure::Gated(HTC_PASSTHROUGH)),
    #[cfg(feature = "meta")]
    module_entry!(nodes::HandTrackingMesh, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::PassthroughGeometry, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::RenderModel, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::SceneManager, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::SpatialAnchorManager, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::SpatialEntity, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::SpatialEntityBatch, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::SpatialEntityQuery, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::SpatialEntityUser, Scene, Exposure::AlwaysOn),
    #[cfg(feature = "meta")]
    module_entry!(nodes::PassthroughColorLut, Scene, Exposure::AlwaysOn),
];

/// Editor tooling, in registration order. Editor plugins are attached as they register.
pub static TOOLING: &[ToolingEntry] = &[
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::OpenXrExport),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::KhronosExport),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::KhronosEditor, plugin),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::LynxEditor, plugin),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::MetaExport),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::MetaEditor, plugin),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::PicoExport),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::PicoEditor, plugin),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::MagicleapExport),
    #[cfg(feature = "editor")]
    tooling_entry!(xrv_export::MagicleapEditor, plugin),
];

pub static CATALOG: Catalog = Catalog {
    core_settings: CORE_SETTINGS,
    scene_settings: SCENE_SETTINGS,
    groups: GROUPS,
    modules: MODULES,
    tooling: TOOLING,
};
