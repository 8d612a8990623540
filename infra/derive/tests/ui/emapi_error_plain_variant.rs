use emapi_derive::emapi_error;
use std::borrow::Cow;

#[emapi_error]
pub enum DocsError {
    #[error("Missing metadata field: {field}")]
    MissingField { field: &'static str },

    #[error("Docs error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DocsError::MissingField { field: "title" };
    assert_eq!(err.to_string(), "Missing metadata field: title");
}
