#[xrv_derive::capability_module(
    name = "OpenXRFbFaceTrackingExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_face_tracking2"]
)]
pub struct FaceTracking;

#[xrv_derive::capability_module(
    name = "OpenXRFbBodyTrackingExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_body_tracking"]
)]
pub struct BodyTracking;
