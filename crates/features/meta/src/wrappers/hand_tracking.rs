use crate::flags::SYSTEM_GESTURE_MENU;
use tracing::debug;
use xrv_domain::settings::SettingDecl;
use xrv_kernel::settings::{Definition, Settings};

#[xrv_derive::capability_module(
    name = "OpenXRFbHandTrackingAimExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_hand_tracking_aim"]
)]
pub struct HandTrackingAim;

#[xrv_derive::capability_module(
    name = "OpenXRFbHandTrackingCapsulesExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_hand_tracking_capsules"]
)]
pub struct HandTrackingCapsules;

#[xrv_derive::capability_module(
    name = "OpenXRFbHandTrackingMeshExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_FB_hand_tracking_mesh"]
)]
pub struct HandTrackingMeshWrapper;

static SYSTEM_GESTURE_MENU_DECL: SettingDecl = SettingDecl::flag(SYSTEM_GESTURE_MENU, true);

/// Setup hook run once the aim wrapper is published: exposes the system gesture toggle.
pub fn add_project_setting(settings: &mut Settings<'_>) -> Vec<(&'static str, Definition)> {
    let outcome = settings.define(&SYSTEM_GESTURE_MENU_DECL);
    debug!(path = SYSTEM_GESTURE_MENU, %outcome, "Hand tracking aim setting defined");
    vec![(SYSTEM_GESTURE_MENU, outcome)]
}
