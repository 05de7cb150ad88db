use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canvas_gateway::api::router;
use canvas_gateway::canvas::{CanvasClient, CanvasConfig, CanvasHttpClient};
use canvas_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "canvas_gateway=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CanvasConfig::from_env();
    let canvas: Arc<dyn CanvasClient> = Arc::new(CanvasHttpClient::new(config)?);

    let state = AppState { canvas };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
