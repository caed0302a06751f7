//! Scene-side classes. They hold data for the wrappers and never talk to the runtime.

#[xrv_derive::capability_module(name = "OpenXRFbHandTrackingMesh", base = "Node3D")]
pub struct HandTrackingMesh;

#[xrv_derive::capability_module(name = "OpenXRFbPassthroughGeometry", base = "Node3D")]
pub struct PassthroughGeometry;

#[xrv_derive::capability_module(name = "OpenXRFbRenderModel", base = "Node3D")]
pub struct RenderModel;

#[xrv_derive::capability_module(name = "OpenXRFbSceneManager", base = "Node")]
pub struct SceneManager;

#[xrv_derive::capability_module(name = "OpenXRFbSpatialAnchorManager", base = "Node")]
pub struct SpatialAnchorManager;

#[xrv_derive::capability_module(name = "OpenXRFbSpatialEntity", base = "RefCounted")]
pub struct SpatialEntity;

#[xrv_derive::capability_module(name = "OpenXRFbSpatialEntityBatch", base = "RefCounted")]
pub struct SpatialEntityBatch;

#[xrv_derive::capability_module(name = "OpenXRFbSpatialEntityQuery", base = "RefCounted")]
pub struct SpatialEntityQuery;

#[xrv_derive::capability_module(name = "OpenXRFbSpatialEntityUser", base = "RefCounted")]
pub struct SpatialEntityUser;

#[xrv_derive::capability_module(name = "OpenXRMetaPassthroughColorLut", base = "Resource")]
pub struct PassthroughColorLut;
