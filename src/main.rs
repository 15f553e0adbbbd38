mod api_doc;
mod config;
mod error;
mod gateway;
mod handlers;
mod models;
mod routes;
mod state;
mod upstream;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    tracing::info!("recipe-gateway starting");

    let config = Config::from_env()?;
    config.log_startup();

    let upstream = UpstreamClient::from_config(&config)?;
    let state = AppState {
        upstream,
        config: Arc::new(config),
    };

    let app = routes::router(state.clone()).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    let address = format!("{}:{}", state.config.service_host, state.config.service_port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
