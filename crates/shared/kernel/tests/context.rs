mod fixtures;

use fixtures::{CATALOG, HOOK_SETTING, HOOKED, PAIR, SOLO, TUNING};
use xrv_kernel::context::GroupOutcome;
use xrv_kernel::prelude::*;

fn run_all(context: &mut ExtensionContext, host: &mut LocalHost) -> Vec<PhaseReport> {
    Phase::ALL.into_iter().map(|phase| context.on_phase(phase, host)).collect()
}

fn store(host: &mut LocalHost) -> &mut ProjectSettings {
    host.settings.as_mut().expect("settings available")
}

#[test]
fn catalog_fixture_is_valid() {
    CATALOG.validate().expect("valid catalog");
}

#[test]
fn core_registers_every_core_module() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);

    let report = context.on_phase(Phase::Core, &mut host);

    assert_eq!(report.status, Status::Applied);
    assert_eq!(
        report.registered,
        vec!["SoloWrapper", "PairLeft", "PairRight", "HookedWrapper", "HiddenWrapper"]
    );
    assert_eq!(report.wrappers, report.registered);
    assert_eq!(report.settings.len(), 3);
    assert!(report.settings.iter().all(|(_, outcome)| *outcome == Definition::Created));
    assert!(host.published().is_empty());
    assert_eq!(
        host.openxr.as_ref().map(XrRuntime::requested_extensions),
        Some(vec!["XR_TEST_hidden", "XR_TEST_hooked", "XR_TEST_pair", "XR_TEST_solo"])
    );
}

#[test]
fn default_flags_publish_every_group() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);

    let reports = run_all(&mut context, &mut host);
    let scene = &reports[2];

    assert_eq!(
        scene.published,
        vec!["SoloWrapper", "PairLeft", "PairRight", "HookedWrapper", "DataHolder"]
    );
    assert_eq!(context.published(), scene.published);
    assert!(!host.published().contains(&"HiddenWrapper"));
    assert_eq!(scene.skipped().count(), 0);
    assert_eq!(store(&mut host).setting(TUNING), Some(SettingValue::Float(0.1)));
}

#[test]
fn disabled_flag_hides_module_but_keeps_class() {
    let mut settings = ProjectSettings::new();
    settings.set_setting(SOLO, SettingValue::Bool(false));
    let mut host = LocalHost::new(settings);
    let mut context = ExtensionContext::new(&CATALOG);

    let reports = run_all(&mut context, &mut host);

    assert!(host.singleton("SoloWrapper").is_none());
    assert!(host.class_db.is_registered("SoloWrapper"));
    assert!(host.class_db.instantiate("SoloWrapper").is_ok());
    assert_eq!(store(&mut host).setting(SOLO), Some(SettingValue::Bool(false)));

    let skipped: Vec<&GroupOutcome> = reports[2].skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].flag, SOLO);
    assert_eq!(skipped[0].decision, GateDecision::Disabled);
}

#[test]
fn published_singleton_is_the_owned_instance() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);
    run_all(&mut context, &mut host);

    let published = host.singleton("PairLeft").expect("published");
    let owned = context.module("PairLeft").expect("owned");
    assert!(same_instance(&published, &owned));

    let fresh = host.class_db.instantiate("PairLeft").expect("constructible");
    assert!(!same_instance(&published, &fresh));
}

#[test]
fn group_is_published_atomically() {
    let mut host = LocalHost::default();
    host.engine
        .as_mut()
        .expect("engine")
        .register_singleton("PairRight", fixtures::DataHolder::create())
        .expect("squat name");
    let mut context = ExtensionContext::new(&CATALOG);

    let reports = run_all(&mut context, &mut host);
    let scene = &reports[2];

    assert!(host.singleton("PairLeft").is_none());
    assert!(!context.published().contains(&"PairLeft"));
    let pair = scene.groups.iter().find(|outcome| outcome.flag == PAIR).expect("pair outcome");
    assert_eq!(pair.decision, GateDecision::Enabled);
    assert!(!pair.published);
    assert!(scene.degraded.iter().any(|reason| reason.contains("rolled back 1")));
    assert!(host.singleton("SoloWrapper").is_some());
}

#[test]
fn setup_hook_runs_only_when_published() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);
    run_all(&mut context, &mut host);
    assert!(store(&mut host).has_setting(HOOK_SETTING));

    let mut settings = ProjectSettings::new();
    settings.set_setting(HOOKED, SettingValue::Bool(false));
    let mut host = LocalHost::new(settings);
    let mut context = ExtensionContext::new(&CATALOG);
    run_all(&mut context, &mut host);
    assert!(!store(&mut host).has_setting(HOOK_SETTING));
}

#[test]
fn setup_hook_settings_are_reported() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);

    let reports = run_all(&mut context, &mut host);

    let scene = &reports[2];
    assert!(scene.settings.contains(&(HOOK_SETTING, Definition::Created)));
    assert!(scene.settings.contains(&(TUNING, Definition::Created)));
}

#[test]
fn scene_without_core_registers_before_publishing() {
    let mut settings = ProjectSettings::new();
    settings.set_setting(SOLO, SettingValue::Bool(true));
    let mut host = LocalHost::new(settings);
    let mut context = ExtensionContext::new(&CATALOG);

    let report = context.on_phase(Phase::Scene, &mut host);

    assert_eq!(report.status, Status::Applied);
    assert!(report.published.contains(&"SoloWrapper"));
    assert!(host.class_db.is_registered("SoloWrapper"));
    assert!(host.class_db.is_registered("HiddenWrapper"));
    assert!(host.wrappers().contains(&"SoloWrapper"));
    assert!(report.settings.contains(&(PAIR, Definition::Created)));
    assert_eq!(context.on_phase(Phase::Core, &mut host).status, Status::OutOfOrder);

    context.shutdown(&mut host);

    assert!(context.module("SoloWrapper").is_none());
    assert!(context.module("DataHolder").is_none());
    assert!(host.published().is_empty());
    assert!(host.wrappers().is_empty());
    assert!(host.class_db.class_names().is_empty());
}

#[test]
fn repeated_core_is_a_no_op() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);

    context.on_phase(Phase::Core, &mut host);
    let classes = host.class_db.class_names();
    let report = context.on_phase(Phase::Core, &mut host);

    assert_eq!(report.status, Status::AlreadyCompleted);
    assert!(report.registered.is_empty());
    assert_eq!(host.class_db.class_names(), classes);
}

#[test]
fn earlier_phase_after_later_is_ignored() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);

    context.on_phase(Phase::Scene, &mut host);
    let report = context.on_phase(Phase::Core, &mut host);

    assert_eq!(report.status, Status::OutOfOrder);
    assert_eq!(context.current_phase(), Some(Phase::Scene));
}

#[test]
fn forward_skip_is_allowed() {
    let mut host = LocalHost::deployed(ProjectSettings::new());
    let mut context = ExtensionContext::new(&CATALOG);

    context.on_phase(Phase::Core, &mut host);
    context.on_phase(Phase::Scene, &mut host);
    let report = context.on_phase(Phase::Max, &mut host);

    assert_eq!(report.status, Status::Applied);
    assert!(context.completed().has(Phase::Max));
    assert!(!context.completed().has(Phase::Editor));
}

#[test]
fn editor_tooling_requires_editor_host() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);
    let reports = run_all(&mut context, &mut host);

    assert_eq!(reports[3].registered, vec!["ExportTool", "EditorTool"]);
    assert_eq!(reports[3].plugins, vec!["EditorTool"]);
    assert_eq!(host.plugins(), vec!["EditorTool"]);

    let mut host = LocalHost::deployed(ProjectSettings::new());
    let mut context = ExtensionContext::new(&CATALOG);
    let reports = run_all(&mut context, &mut host);

    assert_eq!(reports[3].status, Status::Applied);
    assert!(reports[3].registered.is_empty());
    assert!(!host.class_db.is_registered("ExportTool"));
}

#[test]
fn missing_settings_store_degrades_without_publishing_gated_modules() {
    let mut host = LocalHost::default().without_settings();
    let mut context = ExtensionContext::new(&CATALOG);

    let reports = run_all(&mut context, &mut host);

    assert_eq!(reports[0].status, Status::Applied);
    assert!(reports[0].degraded.iter().any(|reason| reason.contains("Settings store unavailable")));
    assert!(host.class_db.is_registered("SoloWrapper"));
    assert!(reports[2].groups.iter().all(|outcome| outcome.decision == GateDecision::Unavailable));
    assert_eq!(host.published(), vec!["DataHolder"]);
}

#[test]
fn missing_namespace_publishes_nothing() {
    let mut host = LocalHost::default().without_engine();
    let mut context = ExtensionContext::new(&CATALOG);

    let reports = run_all(&mut context, &mut host);

    assert!(reports[2].published.is_empty());
    assert!(context.published().is_empty());
    assert!(!reports[2].degraded.is_empty());
}

#[test]
fn missing_runtime_still_registers_classes() {
    let mut host = LocalHost::default().without_openxr();
    let mut context = ExtensionContext::new(&CATALOG);

    let report = context.on_phase(Phase::Core, &mut host);

    assert!(report.wrappers.is_empty());
    assert_eq!(report.degraded.len(), 5);
    assert!(host.class_db.is_registered("HiddenWrapper"));
}

#[test]
fn malformed_flag_is_treated_as_disabled() {
    let mut settings = ProjectSettings::new();
    settings.set_setting(SOLO, SettingValue::String("yes".to_owned()));
    let mut host = LocalHost::new(settings);
    let mut context = ExtensionContext::new(&CATALOG);

    let reports = run_all(&mut context, &mut host);

    let solo = reports[2].groups.iter().find(|outcome| outcome.flag == SOLO).expect("solo");
    assert_eq!(solo.decision, GateDecision::Malformed("string"));
    assert!(host.singleton("SoloWrapper").is_none());
}

#[test]
fn shutdown_restores_the_host() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);
    run_all(&mut context, &mut host);

    let reports = context.shutdown(&mut host);

    let phases: Vec<Phase> = reports.iter().map(|report| report.phase).collect();
    assert_eq!(phases, vec![Phase::Max, Phase::Editor, Phase::Scene, Phase::Servers, Phase::Core]);
    assert!(host.published().is_empty());
    assert!(host.plugins().is_empty());
    assert!(host.wrappers().is_empty());
    assert!(host.class_db.class_names().is_empty());
    assert!(context.module("SoloWrapper").is_none());
    assert!(context.is_terminated());
    assert!(store(&mut host).has_setting(SOLO));

    let report = context.on_phase(Phase::Core, &mut host);
    assert_eq!(report.status, Status::Terminated);
}

#[test]
fn teardown_must_run_latest_first() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);
    run_all(&mut context, &mut host);

    assert_eq!(context.on_terminate(Phase::Core, &mut host).status, Status::OutOfOrder);
    assert!(!host.published().is_empty());

    let mut fresh = ExtensionContext::new(&CATALOG);
    assert_eq!(fresh.on_terminate(Phase::Scene, &mut host).status, Status::NotCompleted);
}

#[test]
fn reload_after_shutdown_starts_clean() {
    let mut host = LocalHost::default();
    let mut first = ExtensionContext::new(&CATALOG);
    run_all(&mut first, &mut host);
    let old = host.singleton("SoloWrapper").expect("published");
    first.shutdown(&mut host);

    let mut second = ExtensionContext::new(&CATALOG);
    let reports = run_all(&mut second, &mut host);

    assert!(reports[0].settings.iter().all(|(_, outcome)| *outcome == Definition::Kept));
    let new = host.singleton("SoloWrapper").expect("republished");
    assert!(!same_instance(&old, &new));
}

#[test]
fn reports_serialize_for_tooling() {
    let mut host = LocalHost::default();
    let mut context = ExtensionContext::new(&CATALOG);
    let report = context.on_phase(Phase::Core, &mut host);

    let json = serde_json::to_value(&report).expect("serializable");
    assert_eq!(json["phase"], "core");
    assert_eq!(json["status"], "applied");
    assert_eq!(json["settings"][0][1], "created");
}
