use emapi_derive::emapi_error;
use std::borrow::Cow;

#[emapi_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn emapi_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/emapi_error_pass.rs");
    t.pass("tests/ui/emapi_error_plain_variant.rs");
}

#[test]
fn source_error_converts_with_question_mark() {
    fn run() -> Result<(), DemoError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io failure should propagate");
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: missing file");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("Reading server.toml").expect_err("io failure");
    assert_eq!(err.to_string(), "IO error (Reading server.toml): missing file");
}

#[test]
fn context_overrides_on_own_results() {
    let result: Result<(), DemoError> = Err("boom".into());
    let err = result.context("Building state").expect_err("internal failure");

    assert!(matches!(err, DemoError::Internal { .. }));
    assert_eq!(err.to_string(), "Internal error (Building state): boom");
}

#[test]
fn owned_strings_become_internal_errors() {
    let err = DemoError::from(format!("code {}", 7));
    assert_eq!(err.to_string(), "Internal error: code 7");
}
