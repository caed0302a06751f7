#[xrv_derive::capability_module(
    name = "DemoExtensionWrapper",
    base = "OpenXRExtensionWrapperExtension",
    extensions = ["XR_DEMO_one", "XR_DEMO_two"]
)]
pub struct DemoWrapper {
    pub frames: u64,
}

fn main() {
    let module = DemoWrapper::create();
    assert_eq!(module.name(), DemoWrapper::NAME);
}
