//! Meta (`XR_FB_*` / `XR_META_*`) capability modules.
//!
//! Extension wrappers live in [`wrappers`] and are registered in the Core phase. The plain
//! data-holder classes in [`nodes`] have no runtime behaviour of their own and are published
//! unconditionally in Scene.

pub mod flags;
pub mod nodes;
pub mod wrappers;
