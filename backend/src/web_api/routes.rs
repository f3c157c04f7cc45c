pub mod health_routes;
pub mod task_routes;

use axum::{response::IntoResponse, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api_error::ApiError, app_state::SharedState};

async fn route_not_found() -> impl IntoResponse {
    ApiError::RouteNotFound
}

pub fn map_routes(app_state: SharedState) -> Router {
    Router::new()
        .merge(task_routes::get_router(app_state))
        .merge(health_routes::get_router())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
