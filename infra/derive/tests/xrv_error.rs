use std::borrow::Cow;
use xrv_derive::xrv_error;

#[xrv_error]
pub enum ManifestError {
    #[error("Manifest I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Manifest rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk gone"))
}

#[test]
fn kind_reports_variant_name() {
    let rejected = ManifestError::Rejected { message: "nope".into(), context: None };
    assert_eq!(rejected.kind(), "Rejected");

    let io: ManifestError = std::io::Error::other("gone").into();
    assert_eq!(io.kind(), "Io");
}

#[test]
fn context_is_attached_to_source_errors() {
    let err = failing_io().context("Loading project file").expect_err("io should fail");
    assert_eq!(err.kind(), "Io");
    let rendered = err.to_string();
    assert!(rendered.contains("(Loading project file)"), "got: {rendered}");
    assert!(rendered.contains("disk gone"), "got: {rendered}");
}

#[test]
fn context_overrides_existing_error_context() {
    let result: Result<(), ManifestError> =
        Err(ManifestError::Rejected { message: "flag".into(), context: None });
    let err = result.context("Evaluating gate").expect_err("should stay an error");
    assert_eq!(err.to_string(), "Manifest rejected (Evaluating gate): flag");
}

#[test]
fn question_mark_converts_source_errors() {
    fn run() -> Result<(), ManifestError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io should fail");
    assert!(matches!(err, ManifestError::Io { context: None, .. }));
}
