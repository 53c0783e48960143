use crate::handlers::{
    health::health_check,
    predict::{get_prediction, upload_prediction},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use common::request::PREDICT_PATH;
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::debug;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Largest CSV accepted by the upload relay
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create application router with all routes and middleware.
///
/// With `static_dir`, every unmatched path is served from the built
/// dashboard, falling back to its `index.html`.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Prediction relay
        .route(
            PREDICT_PATH,
            get(get_prediction)
                .post(upload_prediction)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let router = match static_dir {
        Some(dir) => {
            debug!("Serving dashboard assets from {}", dir.display());
            router.fallback_service(
                ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
            )
        }
        None => router,
    };

    router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(60)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
