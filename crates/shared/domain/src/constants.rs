//! Literal values shared across the workspace.

/// Title published in the OpenAPI `info` block.
pub const API_TITLE: &str = "Employee Management API";
/// Version published in the OpenAPI `info` block.
pub const API_VERSION: &str = "v1";
/// Free-text description published in the OpenAPI `info` block.
pub const API_DESCRIPTION: &str = "Simple CRUD API for managing employees";
/// Contact name published in the OpenAPI `info.contact` block.
pub const CONTACT_NAME: &str = "JavaGuides";
/// Contact email published in the OpenAPI `info.contact` block.
pub const CONTACT_EMAIL: &str = "contact@javaguides.net";

/// OpenAPI tag for infrastructure endpoints (health, docs).
pub const SYSTEM_TAG: &str = "System";

/// Liveness probe route.
pub const HEALTH_PATH: &str = "/health";

/// Default route serving the raw OpenAPI JSON document.
pub const DEFAULT_SPEC_PATH: &str = "/v3/api-docs";
/// Default route serving the interactive documentation UI.
pub const DEFAULT_UI_PATH: &str = "/swagger-ui";
