// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! HTTP transport for the greeting server.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::constants::MAX_BODY_BYTES;
use crate::handlers::greeting::{greeting_http, greeting_query_http, invoke_http};
use crate::handlers::health::health_http;

pub fn app_router() -> Router {
    Router::new()
        .route("/invoke", post(invoke_http))
        .route(
            "/api/greeting",
            post(greeting_http).get(greeting_query_http),
        )
        .route("/api/health", get(health_http))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
