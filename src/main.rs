use anyhow::{Context, Result};
use localized_content::{config::Config, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_content=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Default language: {}, required languages: {}",
        config.default_language,
        config
            .required()
            .iter()
            .collect::<Vec<_>>()
            .join(", ")
    );

    let state = Arc::new(server::AppState::new(&config));
    let app = server::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
