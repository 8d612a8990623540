use anyhow::Context;
use emapi_kernel::config::{config_source, load_config};
use emapi_kernel::domain::config::{ApiConfig, LogConfig};
use emapi_logger::Logger;
use emapi_server::Server;
use tracing::info;

fn init_logger(cfg: &LogConfig) -> anyhow::Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).env_filter(&cfg.level);

    let logger = match &cfg.path {
        Some(path) => builder.path(path).json(cfg.json).init(),
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}

#[emapi_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    // The log section lives in the config, so the source is reported afterwards.
    let cfg: ApiConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.log)?;

    let (source, required) = config_source(None::<&str>);
    info!(path = %source.display(), required, level = %cfg.log.level, "Configuration loaded");

    Server::builder().config(cfg).build()?.run().await
}
