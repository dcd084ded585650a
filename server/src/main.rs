//! Hippias API server binary.
//!
//! Reads settings from the environment (`.env` honored), constructs the
//! backend client once, and serves the full route surface.

use axum::http::Method;
use axum::Router;
use hippias_api::{api_routes, common_routes, AppState, Backend, Settings};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hippias_api=info,hippias_server=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let backend = Backend::new(&settings)?;
    let state = AppState::new(backend);

    // Same policy as the original deployment: any origin, reads only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let app = Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
