use salvo::Router;
use sell_app::app::api::routes;
use sell_app::config::ConfigHandler;
use sell_app::server::bind;
use sell_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting sell API server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    match config.logging.validate() {
        Ok(()) => match EnvFilter::try_new(config.logging.level.as_str()) {
            Ok(filter) => {
                if let Err(e) = filter_handle.modify(|current| *current = filter) {
                    tracing::warn!(error = %e, "Failed to update log filter from config");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to build log filter, keeping info"),
        },
        Err(e) => tracing::warn!(error = %e, "Invalid log level in config, keeping info"),
    }

    let acceptor = bind(&config.server.bind_addr()).await?;

    let router = Router::new().hoop(ConfigHandler::new(config)).push(routes());

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
