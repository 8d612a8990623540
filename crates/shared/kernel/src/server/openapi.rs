//! OpenAPI document assembly.
//!
//! The base document comes from [`ApiDoc`]; its `info` block is always replaced
//! with the [`ApiMetadata`] handed in by the caller, so the rendered
//! documentation shows the metadata verbatim.

use emapi_domain::constants::SYSTEM_TAG;
use emapi_domain::metadata::ApiMetadata;
use utoipa::OpenApi;
use utoipa::openapi::info::{ContactBuilder, Info, InfoBuilder};
use utoipa::openapi::tag::TagBuilder;

/// Base document. Paths are contributed by the routers merged on top of it.
#[derive(Debug, OpenApi)]
pub struct ApiDoc;

/// Maps the metadata onto an OpenAPI `info` object.
#[must_use]
pub fn info(metadata: &ApiMetadata) -> Info {
    let contact = ContactBuilder::new()
        .name(Some(metadata.contact_name()))
        .email(Some(metadata.contact_email()))
        .build();

    InfoBuilder::new()
        .title(metadata.title())
        .version(metadata.version())
        .description(Some(metadata.description()))
        .contact(Some(contact))
        .build()
}

/// Builds the base OpenAPI document carrying `metadata`.
#[must_use]
pub fn openapi(metadata: &ApiMetadata) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info = info(metadata);
    doc.tags = Some(vec![
        TagBuilder::new()
            .name(SYSTEM_TAG)
            .description(Some("Service health and API documentation"))
            .build(),
    ]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use emapi_domain::metadata::provide_metadata;

    #[test]
    fn info_copies_every_field() {
        let info = info(&provide_metadata());

        assert_eq!(info.title, "Employee Management API");
        assert_eq!(info.version, "v1");
        assert_eq!(info.description.as_deref(), Some("Simple CRUD API for managing employees"));

        let contact = info.contact.expect("contact is set");
        assert_eq!(contact.name.as_deref(), Some("JavaGuides"));
        assert_eq!(contact.email.as_deref(), Some("contact@javaguides.net"));
        assert!(contact.url.is_none());
    }

    #[test]
    fn document_declares_system_tag() {
        let doc = openapi(&provide_metadata());
        let tags = doc.tags.expect("tags are set");
        assert!(tags.iter().any(|tag| tag.name == SYSTEM_TAG));
    }
}
