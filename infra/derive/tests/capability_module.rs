use std::sync::Arc;
use xrv_domain::registry::CapabilityModule;

#[xrv_derive::capability_module(
    name = "OpenXRDemoExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_DEMO_alpha", "XR_DEMO_beta"]
)]
pub struct DemoWrapper {
    pub requested: bool,
}

#[xrv_derive::capability_module(name = "DemoHolder")]
pub struct DemoHolder {}

#[test]
fn constants_follow_arguments() {
    assert_eq!(DemoWrapper::NAME, "OpenXRDemoExtensionWrapper");
    assert_eq!(DemoWrapper::BASE, "OpenXRExtensionWrapperExtension");
    assert_eq!(DemoWrapper::EXTENSIONS, &["XR_DEMO_alpha", "XR_DEMO_beta"]);
}

#[test]
fn defaults_apply_without_optional_arguments() {
    assert_eq!(DemoHolder::BASE, "Object");
    assert!(DemoHolder::EXTENSIONS.is_empty());
}

#[test]
fn create_returns_distinct_instances_of_the_same_type() {
    let first = DemoWrapper::create();
    let second = DemoWrapper::create();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.name(), second.name());
    assert!(first.as_any().downcast_ref::<DemoWrapper>().is_some());
    assert!(first.as_any().downcast_ref::<DemoHolder>().is_none());
}

#[test]
fn trait_object_exposes_metadata() {
    let module: Arc<dyn CapabilityModule> = DemoWrapper::create();
    assert_eq!(module.base_class(), "OpenXRExtensionWrapperExtension");
    assert_eq!(module.extensions().len(), 2);
    assert!(format!("{module:?}").contains("DemoWrapper"));
}
