#[xrv_derive::capability_module(
    name = "OpenXRFbSceneExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_scene"]
)]
pub struct Scene;

#[xrv_derive::capability_module(
    name = "OpenXRFbSceneCaptureExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_scene_capture"]
)]
pub struct SceneCapture;

#[xrv_derive::capability_module(
    name = "OpenXRMetaSpatialEntityMeshExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_META_spatial_entity_mesh"]
)]
pub struct SpatialEntityMesh;
