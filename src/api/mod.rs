//! API 模块
//!
//! 提供 REST API 支持。对话与聊天记录端点位于 `/api` 下并要求 Bearer token。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::config::config::ServerConfig;
use crate::observability::{create_observability_router, metrics_middleware};
use crate::security::middleware::{auth_middleware, security_headers_middleware};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::history_routes::create_history_router())
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let observability = app_state.observability.clone();

    Router::new()
        .route("/", get(handlers::api_root))
        .nest("/api", api)
        .with_state(app_state)
        .merge(create_observability_router(observability.clone()))
        .layer(middleware::from_fn_with_state(
            observability,
            metrics_middleware,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer(&server.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}
