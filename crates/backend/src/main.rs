mod assets;
mod config;

use std::path::Path;

use axum::http::HeaderValue;
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use config::Config;

fn cache_layer(cache_header: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    )
}

/// Serve `dir` with `cache_header` set on every response, 404s included.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(cache_layer(cache_header))
}

/// Serve the venue document the seat map fetches at startup.
fn venue_router(venue_path: &Path) -> Router {
    Router::new()
        .route_service("/venue.json", ServeFile::new(venue_path))
        .layer(cache_layer(CACHE_1DAY))
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
fn build_app(config: Config) -> Router {
    let dist_assets = config.dist_dir.join("assets");

    // Static file routers are stateless, merge them before adding app state
    let static_files = Router::new()
        .merge(venue_router(&config.venue_path()))
        .nest(
            "/static",
            cached_static_router(&config.assets_dir, CACHE_1DAY),
        )
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&dist_assets, CACHE_IMMUTABLE),
        );

    Router::new()
        .route("/", get(serve_index))
        .with_state(config)
        .merge(static_files)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // A broken venue document still gets served; the page will show the error.
    if let Err(e) = assets::load_venue(&config.venue_path()) {
        tracing::warn!(error = %e, "Venue document failed validation");
    }

    let port = config.port;
    let app = build_app(config);

    let addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    tracing::info!("Server running at http://localhost:{}", port);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server stopped");
    }
}

async fn serve_index(State(config): State<Config>) -> Html<String> {
    // Try to serve the built frontend, fall back to a simple message
    match tokio::fs::read_to_string(config.index_path()).await {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Seat Map</title></head>
<body>
<h1>Seat Map</h1>
<p>Frontend not built yet. The venue document is at <a href="/venue.json">/venue.json</a>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}
