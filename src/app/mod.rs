//! 应用层

pub mod calculator;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use calculator::handler::{self, AppState};

/// 创建路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::hello))
        .route("/sum", post(handler::sum))
        .route("/sum-with-id", post(handler::sum_with_id))
        .route("/multiply", post(handler::multiply))
        .route("/health", get(handler::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
