use anyhow::Result;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zambia_forecast::{api, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env; missing file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zambia_forecast=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let configured: Vec<_> = config
        .insights
        .providers
        .iter()
        .filter(|p| p.has_api_key())
        .map(|p| p.name.as_str())
        .collect();
    tracing::info!(
        listen_addr = %config.listen_addr,
        default_periods = config.default_periods,
        max_periods = config.max_periods,
        insight_providers = ?configured,
        "Starting zambia-forecast service"
    );

    let state = api::AppState::from_config(&config)?;
    let app = api::app(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    tracing::info!(?addr, "zambia-forecast v{} listening", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
