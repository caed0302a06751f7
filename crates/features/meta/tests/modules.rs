use std::collections::HashSet;
use xrv_domain::registry::{CapabilityModule, ModuleFactory};
use xrv_domain::settings::SettingValue;
use xrv_kernel::settings::{Definition, Settings};
use xrv_meta::flags::SYSTEM_GESTURE_MENU;
use xrv_meta::{nodes, wrappers};
use xrv_settings::{ProjectSettings, SettingsStore};

const WRAPPER_BASE: &str = "OpenXRExtensionWrapperExtension";

const WRAPPERS: [ModuleFactory; 20] = [
    wrappers::Passthrough::create,
    wrappers::RenderModelWrapper::create,
    wrappers::SceneCapture::create,
    wrappers::SpatialEntityWrapper::create,
    wrappers::SpatialEntitySharing::create,
    wrappers::SpatialEntityStorage::create,
    wrappers::SpatialEntityStorageBatch::create,
    wrappers::SpatialEntityQueryWrapper::create,
    wrappers::SpatialEntityContainer::create,
    wrappers::SpatialEntityUserWrapper::create,
    wrappers::SpatialEntityMesh::create,
    wrappers::Scene::create,
    wrappers::FaceTracking::create,
    wrappers::BodyTracking::create,
    wrappers::HandTrackingMeshWrapper::create,
    wrappers::HandTrackingAim::create,
    wrappers::HandTrackingCapsules::create,
    wrappers::CompositionLayerSecureContent::create,
    wrappers::CompositionLayerAlphaBlend::create,
    wrappers::CompositionLayerSettings::create,
];

const NODES: [ModuleFactory; 10] = [
    nodes::HandTrackingMesh::create,
    nodes::PassthroughGeometry::create,
    nodes::RenderModel::create,
    nodes::SceneManager::create,
    nodes::SpatialAnchorManager::create,
    nodes::SpatialEntity::create,
    nodes::SpatialEntityBatch::create,
    nodes::SpatialEntityQuery::create,
    nodes::SpatialEntityUser::create,
    nodes::PassthroughColorLut::create,
];

#[test]
fn wrappers_request_vendor_extensions() {
    for factory in WRAPPERS {
        let module = factory();
        assert_eq!(module.base_class(), WRAPPER_BASE, "{}", module.name());
        assert!(module.name().ends_with("ExtensionWrapper"), "{}", module.name());
        assert!(!module.extensions().is_empty(), "{}", module.name());
        assert!(
            module
                .extensions()
                .iter()
                .all(|ext| ext.starts_with("XR_FB_") || ext.starts_with("XR_META_")),
            "{}",
            module.name()
        );
    }
}

#[test]
fn nodes_request_nothing() {
    for factory in NODES {
        let module = factory();
        assert!(module.extensions().is_empty(), "{}", module.name());
        assert_ne!(module.base_class(), WRAPPER_BASE);
    }
}

#[test]
fn class_names_are_unique() {
    let names: HashSet<&str> = WRAPPERS.iter().chain(&NODES).map(|factory| factory().name()).collect();
    assert_eq!(names.len(), WRAPPERS.len() + NODES.len());
}

#[test]
fn passthrough_asks_for_its_mesh_extension() {
    assert!(wrappers::Passthrough::EXTENSIONS.contains(&"XR_FB_triangle_mesh"));
}

#[test]
fn aim_setup_defines_gesture_setting_once() {
    let mut store = ProjectSettings::new();
    let mut settings = Settings::new(Some(&mut store));

    let first = wrappers::add_project_setting(&mut settings);
    let second = wrappers::add_project_setting(&mut settings);

    assert_eq!(first, vec![(SYSTEM_GESTURE_MENU, Definition::Created)]);
    assert_eq!(second, vec![(SYSTEM_GESTURE_MENU, Definition::Kept)]);

    assert_eq!(store.setting(SYSTEM_GESTURE_MENU), Some(SettingValue::Bool(true)));
    assert!(store.entry(SYSTEM_GESTURE_MENU).is_some_and(|entry| entry.property_info.is_some()));
}

#[test]
fn aim_setup_tolerates_missing_store() {
    let mut settings = Settings::new(None);
    let outcome = wrappers::add_project_setting(&mut settings);

    assert_eq!(outcome, vec![(SYSTEM_GESTURE_MENU, Definition::Unavailable)]);
}
