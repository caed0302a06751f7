#[xrv_derive::capability_module(
    name = "OpenXRFbPassthroughExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_passthrough", "XR_FB_triangle_mesh", "XR_META_passthrough_color_lut"]
)]
pub struct Passthrough;

#[xrv_derive::capability_module(
    name = "OpenXRFbRenderModelExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_render_model"]
)]
pub struct RenderModelWrapper;
