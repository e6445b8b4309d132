mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let conf = leptos::config::get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    tracing::info!(output_name = %conf.leptos_options.output_name, "leptos configuration loaded");

    let app = routes::app(conf.leptos_options, &config);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, compression = config.compression, "ehya listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
