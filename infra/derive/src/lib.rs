#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by the workspace crates:
//!
//! * [`macro@emapi_error`] turns an enum into a `thiserror` error with `.context(..)` support.
//! * [`macro@api_model`] / [`macro@api_handler`] wire DTOs and axum handlers into `utoipa`.
//! * [`macro@main`] boots the tokio runtime from `emapi-runtime`.
//!
//! Examples are `ignore`d because they only compile inside consuming crates.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the tokio runtime.
///
/// Transforms an `async fn main` returning a `Result` into a plain `fn main`
/// that builds a runtime from an `emapi_runtime::RuntimeConfig` preset and
/// blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Larger stacks and longer keep-alive for servers.
/// * `memory_efficient` - Half the workers and smaller stacks.
/// * `default` (or no argument) - Worker threads auto-detected.
///
/// # Examples
///
/// ```rust,ignore
/// #[emapi_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for API data models (DTOs).
///
/// * Adds `Debug`, `serde::Serialize` and `serde::Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` unless overridden with
///   `rename_all = "..."`.
/// * Applies `#[serde(deny_unknown_fields)]` unless `deny_unknown_fields = false`.
///
/// # Example
///
/// ```rust,ignore
/// #[emapi_derive::api_model(rename_all = "snake_case")]
/// pub struct HealthResponse {
///     pub status: &'static str,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro bridging axum handlers and `utoipa::path`.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `path = "..."`,
/// `responses(...)`, `tag = ...`). The documentation attribute is only emitted
/// when the consuming crate enables its `server` feature.
///
/// # Example
///
/// ```rust,ignore
/// #[emapi_derive::api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for crate error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)`, implemented for
///   `Result<T, ErrorName>` and for `Result<T, SourceError>` of every variant
///   holding a source.
/// * `From<SourceError>` for variants with a `source` field (or a field marked
///   `#[source]` / `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must have named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[emapi_derive::emapi_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().context("Bad shape")
/// }
/// ```
#[proc_macro_attribute]
pub fn emapi_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
