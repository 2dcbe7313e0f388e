//! Route configuration and setup.

mod health;

use crate::handlers;
use crate::state::AppState;
use crate::utils::upload::reject_oversized_content_length;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tubely_core::Config;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let protected_routes = thumbnail_routes(config)
        .merge(video_routes(config))
        .layer(axum::middleware::from_fn_with_state(
            state.jwt.clone(),
            crate::auth::middleware::auth_middleware,
        ));

    let app = public_routes(config)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn public_routes(config: &Config) -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .nest_service("/assets", ServeDir::new(config.assets_root()))
}

/// Thumbnail uploads are buffered in memory, so the extractor limit applies.
/// It is enforced while the multipart body is read, after the owner check.
fn thumbnail_routes(config: &Config) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/thumbnail_upload/{videoID}",
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .route(
            "/api/thumbnail/{videoID}",
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .layer(DefaultBodyLimit::max(config.max_thumbnail_size_bytes()))
}

/// Video uploads are streamed to disk. A declared oversize Content-Length gets the
/// JSON 413 up front; the body limit layer caps chunked bodies while streaming.
fn video_routes(config: &Config) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/video_upload/{videoID}",
            post(handlers::video_upload::upload_video),
        )
        .route(
            "/api/video/{videoID}",
            post(handlers::video_upload::upload_video),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_video_size_bytes()))
        .layer(axum::middleware::from_fn_with_state(
            config.max_video_size_bytes(),
            reject_oversized_content_length,
        ))
        .route(
            "/api/videos/{videoID}",
            get(handlers::video_get::get_video),
        )
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
