//! Spatial entity wrappers. Entity, storage, query and container are published together
//! under `fb_spatial`; the rest are reached through those four.

#[xrv_derive::capability_module(
    name = "OpenXRFbSpatialEntityExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_spatial_entity"]
)]
pub struct SpatialEntityWrapper;

#[xrv_derive::capability_module(
    name = "OpenXRFbSpatialEntityStorageExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_spatial_entity_storage"]
)]
pub struct SpatialEntityStorage;

#[xrv_derive::capability_module(
    name = "OpenXRFbSpatialEntityQueryExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_spatial_entity_query"]
)]
pub struct SpatialEntityQueryWrapper;

#[xrv_derive::capability_module(
    name = "OpenXRFbSpatialEntityContainerExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_spatial_entity_container"]
)]
pub struct SpatialEntityContainer;

#[xrv_derive::capability_module(
    name = "OpenXRFbSpatialEntitySharingExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_spatial_entity_sharing"]
)]
pub struct SpatialEntitySharing;

#[xrv_derive::capability_module(
    name = "OpenXRFbSpatialEntityStorageBatchExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_spatial_entity_storage_batch"]
)]
pub struct SpatialEntityStorageBatch;

#[xrv_derive::capability_module(
    name = "OpenXRFbSpatialEntityUserExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_spatial_entity_user"]
)]
pub struct SpatialEntityUserWrapper;
