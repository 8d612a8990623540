use emapi_domain::metadata::{ApiMetadata, provide_metadata};

#[test]
fn provider_returns_published_values() {
    let metadata = provide_metadata();

    assert_eq!(metadata.title(), "Employee Management API");
    assert_eq!(metadata.version(), "v1");
    assert_eq!(metadata.description(), "Simple CRUD API for managing employees");
    assert_eq!(metadata.contact_name(), "JavaGuides");
    assert_eq!(metadata.contact_email(), "contact@javaguides.net");
}

#[test]
fn provider_is_idempotent() {
    assert_eq!(provide_metadata(), provide_metadata());
}

#[test]
fn metadata_serializes_with_snake_case_fields() {
    let value = serde_json::to_value(provide_metadata()).expect("serialize metadata");

    assert_eq!(value["title"], "Employee Management API");
    assert_eq!(value["contact_email"], "contact@javaguides.net");
}

#[test]
fn custom_metadata_keeps_values() {
    let metadata = ApiMetadata::new("Payroll", "v2", "Payroll API", "HR", "hr@example.com");

    assert_eq!(metadata.title(), "Payroll");
    assert_eq!(metadata.contact_name(), "HR");
    assert_ne!(metadata, provide_metadata());
}
