mod blob;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::http::{HeaderValue, header};
use lovedir_core::LoveDirConfig;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::blob::FsBlobStore;
use crate::state::AppState;

/// Uploaded files never change, so clients may cache them for a year.
const BLOB_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = LoveDirConfig::load()?;
    let blob_dir = config.blob_path();
    std::fs::create_dir_all(&blob_dir)?;

    let store = FsBlobStore::new(&blob_dir, config.public_base_url());
    tracing::info!(dir = %store.root().display(), "serving blobs");

    let state = AppState::new(Arc::new(store));
    let app = app(state, blob_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server_port));
    tracing::info!("lovedir-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The full router: upload endpoint plus static serving of stored blobs.
fn app(state: AppState, blob_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let blobs = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(BLOB_CACHE_CONTROL),
        ))
        .service(ServeDir::new(blob_dir));

    Router::new()
        .merge(routes::upload::router())
        .nest_service("/blobs", blobs)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
