use xrv_domain::settings::{SettingDecl, SettingKind, SettingValue, Visibility};

#[test]
fn bool_reads_are_strict() {
    assert_eq!(SettingValue::Bool(true).as_bool(), Some(true));
    assert_eq!(SettingValue::Int(1).as_bool(), None);
    assert_eq!(SettingValue::String("true".to_owned()).as_bool(), None);
    assert_eq!(SettingValue::Float(0.0).as_bool(), None);
}

#[test]
fn numeric_reads_accept_integers() {
    assert_eq!(SettingValue::Float(0.25).as_float(), Some(0.25));
    assert_eq!(SettingValue::Int(2).as_float(), Some(2.0));
    assert_eq!(SettingValue::Bool(true).as_float(), None);
    assert!(SettingValue::Int(3).matches(SettingKind::Float));
    assert!(!SettingValue::Int(3).matches(SettingKind::Bool));
}

#[test]
fn parse_prefers_bool_then_number_then_string() {
    assert_eq!(SettingValue::parse("TRUE"), SettingValue::Bool(true));
    assert_eq!(SettingValue::parse(" false"), SettingValue::Bool(false));
    assert_eq!(SettingValue::parse("7"), SettingValue::Int(7));
    assert_eq!(SettingValue::parse("0.1"), SettingValue::Float(0.1));
    assert_eq!(SettingValue::parse("yes"), SettingValue::String("yes".to_owned()));
}

#[test]
fn untagged_json_keeps_value_types() {
    let values: Vec<SettingValue> =
        serde_json::from_str(r#"[true, 3, 0.5, "on"]"#).expect("deserialize");
    assert_eq!(
        values,
        vec![
            SettingValue::Bool(true),
            SettingValue::Int(3),
            SettingValue::Float(0.5),
            SettingValue::String("on".to_owned()),
        ]
    );
}

#[test]
fn declarations_default_to_advanced_tier() {
    let flag = SettingDecl::flag("xr/openxr/extensions/fb_scene", true);
    assert_eq!(flag.kind, SettingKind::Bool);
    assert_eq!(flag.tier, Visibility::Advanced);
    assert_eq!(flag.default, SettingValue::Bool(true));

    let thickness = SettingDecl::float("xr/openxr/extensions/meta_scene_api/thickness", 0.1).basic();
    assert_eq!(thickness.tier, Visibility::Basic);
    assert_eq!(thickness.property_info().name, thickness.path);
    assert_eq!(thickness.property_info().kind, SettingKind::Float);
}
