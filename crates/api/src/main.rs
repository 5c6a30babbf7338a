use std::sync::Arc;

use anyhow::Context;

use rfpmatch_api::app::{self, services::AppServices};
use rfpmatch_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rfpmatch_observability::init();

    let config = ApiConfig::from_env().context("invalid API configuration")?;
    let services = AppServices::from_config(&config).context("failed to build services")?;
    let app = app::build_app(Arc::new(services), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
