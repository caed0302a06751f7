//! `OpenXR` extension wrappers.
//!
//! Each wrapper names the runtime extensions it asks for. Whether its singleton is published
//! is decided by the catalog, not by the wrapper.

mod composition;
mod hand_tracking;
mod passthrough;
mod scene;
mod spatial;
mod tracking;

pub use composition::{CompositionLayerAlphaBlend, CompositionLayerSecureContent, CompositionLayerSettings};
pub use hand_tracking::{HandTrackingAim, HandTrackingCapsules, HandTrackingMeshWrapper, add_project_setting};
pub use passthrough::{Passthrough, RenderModelWrapper};
pub use scene::{Scene, SceneCapture, SpatialEntityMesh};
pub use spatial::{
    SpatialEntityContainer, SpatialEntityQueryWrapper, SpatialEntitySharing, SpatialEntityStorage,
    SpatialEntityStorageBatch, SpatialEntityUserWrapper, SpatialEntityWrapper,
};
pub use tracking::{BodyTracking, FaceTracking};
