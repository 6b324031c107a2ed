//! Security Middleware Module
//!
//! Axum middleware for bearer-token authentication and security headers.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::api::app_state::AppState;
use crate::error::AppError;
use crate::security::auth::Credentials;

/// Authentication middleware
///
/// Resolves the bearer token to [`Claims`](crate::security::auth::Claims) and stores them in the request
/// extensions; rejects with `401 {message, error}` otherwise.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = extract_credentials(&req);

    let claims = state
        .authenticator
        .authenticate(&credentials)
        .await
        .inspect_err(|e| warn!(path = %req.uri().path(), "Rejected request: {}", e))?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Extract credentials from request headers
pub fn extract_credentials(req: &Request<Body>) -> Credentials {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    Credentials::from_authorization_header(auth_header)
}

/// Security headers middleware
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );

    response
}
