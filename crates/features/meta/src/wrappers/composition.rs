#[xrv_derive::capability_module(
    name = "OpenXRFbCompositionLayerSettingsExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_composition_layer_settings"]
)]
pub struct CompositionLayerSettings;

/// Always registered; reads its own flag when the runtime negotiates extensions.
#[xrv_derive::capability_module(
    name = "OpenXRFbCompositionLayerSecureContentExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_composition_layer_secure_content"]
)]
pub struct CompositionLayerSecureContent;

#[xrv_derive::capability_module(
    name = "OpenXRFbCompositionLayerAlphaBlendExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_composition_layer_alpha_blend"]
)]
pub struct CompositionLayerAlphaBlend;
