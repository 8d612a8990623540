use axum::extract::FromRef;
use emapi_domain::config::ApiConfig;
use emapi_domain::metadata::ApiMetadata;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[emapi_derive::emapi_error]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Everything request handlers may read. Never mutated after startup.
#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    metadata: Arc<ApiMetadata>,
}

/// Cheaply clonable application state.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    /// The documentation metadata registered at startup.
    #[must_use]
    pub fn metadata(&self) -> &ApiMetadata {
        &self.inner.metadata
    }

    /// Shared handle to the metadata, for consumers that outlive a borrow.
    #[must_use]
    pub fn metadata_handle(&self) -> Arc<ApiMetadata> {
        Arc::clone(&self.inner.metadata)
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for Arc<ApiMetadata> {
    fn from_ref(state: &ApiState) -> Self {
        state.metadata_handle()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    metadata: Option<ApiMetadata>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn metadata(mut self, metadata: ApiMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns [`ApiStateError::Validation`] if the config or metadata is
    /// missing, or if a metadata field is blank.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "ApiConfig not provided".into(),
            context: None,
        })?;
        let metadata = self.metadata.ok_or_else(|| ApiStateError::Validation {
            message: "ApiMetadata not provided".into(),
            context: None,
        })?;

        if let Some(field) = metadata.blank_field() {
            return Err(ApiStateError::Validation {
                message: format!("metadata field `{field}` must not be blank").into(),
                context: None,
            });
        }

        super::health::mark_start();

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, metadata: Arc::new(metadata) }) })
    }
}
