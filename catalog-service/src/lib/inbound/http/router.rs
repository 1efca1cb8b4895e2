use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_clothes::create_clothes;
use super::handlers::get_clothes::get_clothes;
use super::handlers::list_clothes::list_clothes;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::clothes::service::ClothesService;
use crate::domain::user::service::UserService;

/// Shared application state, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub clothes: Arc<ClothesService>,
    pub tokens: Arc<TokenService>,
}

pub fn create_router(
    users: Arc<UserService>,
    clothes: Arc<ClothesService>,
    tokens: Arc<TokenService>,
) -> Router {
    let state = AppState {
        users,
        clothes,
        tokens,
    };

    let public_routes = Router::new().route("/register", post(register));

    let protected_routes = Router::new()
        .route("/clothes", get(list_clothes).post(create_clothes))
        .route("/clothes/:clothes_id", get(get_clothes))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
