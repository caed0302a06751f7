use proptest::prelude::*;
use xrv_kernel::prelude::*;

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..4).prop_map(|segments| segments.join("/"))
}

fn value() -> impl Strategy<Value = SettingValue> {
    prop_oneof![
        any::<bool>().prop_map(SettingValue::Bool),
        any::<i32>().prop_map(|n| SettingValue::Int(i64::from(n))),
        "[a-z]{0,6}".prop_map(SettingValue::String),
    ]
}

proptest! {
    #[test]
    fn define_never_overwrites_a_stored_value(path in path(), stored in value(), default in any::<bool>(), times in 1usize..4) {
        let leaked: &'static str = Box::leak(path.into_boxed_str());
        let decl = SettingDecl::flag(leaked, default);

        let mut store = ProjectSettings::new();
        store.set_setting(leaked, stored.clone());

        let mut settings = Settings::new(Some(&mut store));
        for _ in 0..times {
            prop_assert_eq!(settings.define(&decl), Definition::Kept);
        }
        prop_assert_eq!(settings.get(leaked), Some(stored));

        let entry = store.entry(leaked).expect("entry");
        prop_assert_eq!(entry.initial_value.clone(), Some(SettingValue::Bool(default)));
    }

    #[test]
    fn define_on_empty_store_creates_once(path in path(), default in any::<bool>()) {
        let leaked: &'static str = Box::leak(path.into_boxed_str());
        let decl = SettingDecl::flag(leaked, default);

        let mut store = ProjectSettings::new();
        let mut settings = Settings::new(Some(&mut store));

        prop_assert_eq!(settings.define(&decl), Definition::Created);
        prop_assert_eq!(settings.define(&decl), Definition::Kept);
        prop_assert_eq!(settings.get(leaked), Some(SettingValue::Bool(default)));
    }
}
