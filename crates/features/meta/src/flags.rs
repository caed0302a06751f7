//! Project setting paths owned by the Meta modules.

pub const FB_BODY_TRACKING: &str = "xr/openxr/extensions/fb_body_tracking";
pub const FB_COMPOSITION_LAYER_ALPHA_BLEND: &str =
    "xr/openxr/extensions/fb_composition_layer_alpha_blend";
pub const FB_COMPOSITION_LAYER_SECURE_CONTENT: &str =
    "xr/openxr/extensions/fb_composition_layer_secure_content";
pub const FB_COMPOSITION_LAYER_SETTINGS: &str = "xr/openxr/extensions/fb_composition_layer_settings";
pub const FB_FACE_TRACKING: &str = "xr/openxr/extensions/fb_face_tracking";
pub const FB_HAND_TRACKING_AIM: &str = "xr/openxr/extensions/fb_hand_tracking_aim";
pub const FB_HAND_TRACKING_CAPSULES: &str = "xr/openxr/extensions/fb_hand_tracking_capsules";
pub const FB_HAND_TRACKING_MESH: &str = "xr/openxr/extensions/fb_hand_tracking_mesh";
pub const FB_PASSTHROUGH: &str = "xr/openxr/extensions/fb_passthrough";
pub const FB_RENDER_MODEL: &str = "xr/openxr/extensions/fb_render_model";
pub const FB_SCENE_CAPTURE: &str = "xr/openxr/extensions/fb_scene_capture";
pub const FB_SCENE: &str = "xr/openxr/extensions/fb_scene";
pub const FB_SPATIAL: &str = "xr/openxr/extensions/fb_spatial";

/// Thickness given to collision shapes generated from 2D scene planes.
pub const COLLISION_SHAPE_2D_THICKNESS: &str =
    "xr/openxr/extensions/meta_scene_api/collision_shape_2d_thickness";
pub const COLLISION_SHAPE_2D_THICKNESS_DEFAULT: f64 = 0.1;

/// Contributed by the hand tracking aim wrapper once it is published.
pub const SYSTEM_GESTURE_MENU: &str = "xr/openxr/extensions/fb_hand_tracking_aim/system_gesture_menu";
