//! Kernel utilities shared by the applications.
//! Keep this crate lightweight: configuration loading, plus (behind the `server`
//! feature) application state, system routes and the OpenAPI document builder.
//!
//! ## Config loading
//! ```rust,no_run
//! use emapi_kernel::config::load_config;
//! use emapi_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>).unwrap();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use emapi_domain as domain;

