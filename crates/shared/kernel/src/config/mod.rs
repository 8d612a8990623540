use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of environment overrides (`EMAPI__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "EMAPI";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Base name of the file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

#[emapi_derive::emapi_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Resolves the base file the loader reads and whether it must exist.
///
/// Exposed so callers can report the source once logging is up, since the
/// config usually has to be read before a subscriber can be installed.
#[must_use]
pub fn config_source(path: Option<impl AsRef<Path>>) -> (PathBuf, bool) {
    path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    )
}

/// Loads layered configuration: a base file, then `EMAPI__*` environment overrides.
///
/// * With `Some(path)` the file must exist. The extension picks the format;
///   without one, `config` probes the known extensions (`server.toml`,
///   `server.yaml`, ...).
/// * With `None`, an optional `server` file in the working directory is used,
///   so the defaults of `T` apply when nothing is present.
///
/// # Errors
/// Returns [`ConfigError::Config`] when a required file is missing, a file or
/// environment value is malformed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use emapi_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`] but reads overrides from `env` instead of the process
/// environment when given. Keys keep their `EMAPI__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = config_source(path);

    debug!(path = %file.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
