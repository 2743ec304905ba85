pub mod reflection;
pub mod shipping;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: RPC methods, reflection and health.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let rpc = Router::new()
        .route(shipping::CREATE_CONSIGNMENT_PATH, post(shipping::create_consignment))
        .route(shipping::GET_CONSIGNMENTS_PATH, post(shipping::get_consignments));

    let reflection = Router::new()
        .route("/reflection/openapi.json", get(reflection::openapi_document))
        .route("/reflection/services", get(reflection::list_services));

    Router::new()
        .route("/health", get(health))
        .merge(rpc)
        .merge(reflection)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
