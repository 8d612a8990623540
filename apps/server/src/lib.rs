//! # Employee Management API server
//!
//! Serves the OpenAPI documentation of the Employee Management API: the raw
//! JSON document, a Scalar UI over it, and a `/health` probe.
//!
//! The documentation metadata is wired explicitly: the builder takes the value
//! from [`provide_metadata`] unless another one is passed to
//! [`ServerBuilder::metadata`].
//!
//! ## Example
//! ```no_run
//! use emapi_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8080)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, bail};
use axum::Router;
use axum_server::Handle;
use emapi_kernel::domain::config::{ApiConfig, DocsConfig};
use emapi_kernel::domain::constants::HEALTH_PATH;
use emapi_kernel::domain::metadata::{ApiMetadata, provide_metadata};
use emapi_kernel::server::ApiState;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// How long in-flight requests may run after a shutdown signal.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
    metadata: Option<ApiMetadata>,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Publishes `metadata` instead of the default Employee Management API record.
    pub fn metadata(mut self, metadata: ApiMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    fn validate_ssl_config(&self) -> Result<()> {
        if let Some(ssl) = &self.cfg.server.ssl {
            if !ssl.cert.exists() {
                bail!("SSL certificate not found at: {}", ssl.cert.display());
            }
            if !ssl.key.exists() {
                bail!("SSL key not found at: {}", ssl.key.display());
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let metadata = ssl.key.metadata()?;
                if metadata.permissions().mode() & 0o077 != 0 {
                    tracing::warn!(
                        "SECURITY: SSL Private Key {} has insecure permissions (should be 600)",
                        ssl.key.display()
                    );
                }
            }
        }
        Ok(())
    }

    fn validate_docs_config(&self) -> Result<()> {
        let DocsConfig { enabled, spec_path, ui_path } = &self.cfg.docs;
        if !enabled {
            return Ok(());
        }

        for (name, path) in [("docs.spec_path", spec_path), ("docs.ui_path", ui_path)] {
            if !path.starts_with('/') {
                bail!("{name} must start with '/', got {path:?}");
            }
            if path == HEALTH_PATH {
                bail!("{name} collides with the health endpoint");
            }
            if path.contains(['{', '}']) || path.split('/').any(|s| s.starts_with([':', '*'])) {
                bail!(
                    "{name} must be a static route without captures or wildcards, got {path:?}"
                );
            }
        }
        if spec_path == ui_path {
            bail!("docs.spec_path and docs.ui_path must differ (both are {spec_path:?})");
        }
        Ok(())
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Validates TLS files and documentation routes
    /// 2. Resolves the documentation metadata (explicit or [`provide_metadata`])
    /// 3. Constructs the immutable application state
    ///
    /// # Errors
    /// Returns an error if:
    /// * SSL certificate/key files are missing
    /// * Documentation routes are malformed or collide
    /// * A metadata field is blank
    pub fn build(self) -> Result<Server> {
        self.validate_ssl_config()?;
        self.validate_docs_config()?;

        let metadata = self.metadata.unwrap_or_else(provide_metadata);
        info!(
            title = metadata.title(),
            version = metadata.version(),
            "Registering API documentation metadata"
        );

        let state = ApiState::builder()
            .config(self.cfg)
            .metadata(metadata)
            .build()
            .context("Failed to finalize API state")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    ///
    /// # Examples
    /// ```no_run
    /// # use emapi_server::Server;
    /// # async fn example() -> anyhow::Result<()> {
    /// Server::builder().port(8080).build()?.run().await
    /// # }
    /// ```
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Builds the complete HTTP router (health, OpenAPI JSON, Scalar UI).
    #[must_use]
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address
    /// or if SSL/TLS setup fails.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        info!(
            address = %address,
            ssl = cfg.server.ssl.is_some(),
            docs = cfg.docs.enabled,
            "Starting server"
        );

        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
        });

        if let Some(ssl_config) = &cfg.server.ssl {
            info!("Starting HTTPS server on https://{address}");

            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &ssl_config.cert,
                &ssl_config.key,
            )
            .await
            .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            info!("Starting HTTP server on http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Waits for Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
