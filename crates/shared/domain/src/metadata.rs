//! API documentation metadata.
//!
//! [`ApiMetadata`] is built once at startup by [`provide_metadata`] and handed
//! to whatever renders the OpenAPI document. It has no setters; share it behind
//! an `Arc` instead of cloning it around.

use crate::constants::{API_DESCRIPTION, API_TITLE, API_VERSION, CONTACT_EMAIL, CONTACT_NAME};
use serde::{Deserialize, Serialize};

/// Title, version, description and contact of the published API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiMetadata {
    title: String,
    version: String,
    description: String,
    contact_name: String,
    contact_email: String,
}

impl ApiMetadata {
    /// Builds a metadata record from arbitrary values.
    ///
    /// No validation happens here; call [`ApiMetadata::blank_field`] before
    /// publishing a record that did not come from [`provide_metadata`].
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
        contact_name: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: description.into(),
            contact_name: contact_name.into(),
            contact_email: contact_email.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    #[must_use]
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    /// Returns the name of the first field that is empty or whitespace-only.
    #[must_use]
    pub fn blank_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("version", &self.version),
            ("description", &self.description),
            ("contact_name", &self.contact_name),
            ("contact_email", &self.contact_email),
        ]
        .into_iter()
        .find_map(|(name, value)| value.trim().is_empty().then_some(name))
    }
}

impl Default for ApiMetadata {
    fn default() -> Self {
        provide_metadata()
    }
}

/// Produces the metadata of the Employee Management API.
///
/// Pure and infallible; every call returns an equal value.
///
/// # Example
/// ```rust
/// use emapi_domain::metadata::provide_metadata;
///
/// let metadata = provide_metadata();
/// assert_eq!(metadata.title(), "Employee Management API");
/// assert_eq!(metadata.version(), "v1");
/// ```
#[must_use]
pub fn provide_metadata() -> ApiMetadata {
    ApiMetadata::new(API_TITLE, API_VERSION, API_DESCRIPTION, CONTACT_NAME, CONTACT_EMAIL)
}
