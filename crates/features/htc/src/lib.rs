//! HTC (`XR_HTC_*`) capability modules.

pub const HTC_FACIAL_TRACKING: &str = "xr/openxr/extensions/htc_facial_tracking";
pub const HTC_PASSTHROUGH: &str = "xr/openxr/extensions/htc_passthrough";

#[xrv_derive::capability_module(
    name = "OpenXRHtcFacialTrackingExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_HTC_facial_tracking"]
)]
pub struct FacialTracking;

#[xrv_derive::capability_module(
    name = "OpenXRHtcPassthroughExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_HTC_passthrough"]
)]
pub struct Passthrough;
