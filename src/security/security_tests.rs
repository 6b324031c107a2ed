//! Security Module Tests
//!
//! Tests for bearer-token authentication.

#[cfg(test)]
mod auth_tests {
    use crate::config::config::AppConfig;
    use crate::security::auth::*;

    const SECRET: &str = "dev-secret-change-in-production-min-32-chars";

    fn jwt_auth() -> JwtAuth {
        JwtAuth::new(SECRET, "sprout".to_string(), "sprout-api".to_string())
    }

    fn generator(expiry_seconds: u64) -> JwtTokenGenerator {
        JwtTokenGenerator::new(
            SECRET,
            "sprout".to_string(),
            "sprout-api".to_string(),
            expiry_seconds,
        )
    }

    #[tokio::test]
    async fn test_jwt_authentication_valid_token() {
        let token = generator(3600).generate_token("user123").unwrap();

        let credentials = Credentials::new(Some(token.clone()));
        let result = jwt_auth().authenticate(&credentials).await;

        assert!(result.is_ok());
        let claims = result.unwrap();
        assert_eq!(claims.user_id(), "user123");
        assert!(!claims.is_expired());
    }

    #[tokio::test]
    async fn test_jwt_authentication_invalid_token() {
        let credentials = Credentials::new(Some("invalid.jwt.token".to_string()));
        let result = jwt_auth().authenticate(&credentials).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_jwt_authentication_no_token() {
        let result = jwt_auth().authenticate(&Credentials::default()).await;
        assert!(matches!(result, Err(crate::error::AppError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_jwt_wrong_secret_rejected() {
        let other = JwtTokenGenerator::new(
            "another-secret-that-is-also-32-chars-long",
            "sprout".to_string(),
            "sprout-api".to_string(),
            3600,
        );
        let token = other.generate_token("user123").unwrap();
        assert!(jwt_auth().validate_token(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_jwt_wrong_audience_rejected() {
        let other = JwtTokenGenerator::new(SECRET, "sprout".to_string(), "elsewhere".to_string(), 3600);
        let token = other.generate_token("user123").unwrap();
        assert!(jwt_auth().validate_token(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_config_generator_and_auth_agree() {
        let config = AppConfig::development();
        let token = JwtTokenGenerator::from_config(&config.security)
            .generate_token("user42")
            .unwrap();

        let claims = JwtAuth::from_config(&config.security)
            .validate_token(&token)
            .await
            .unwrap();
        assert_eq!(claims.user_id(), "user42");
    }

    #[tokio::test]
    async fn test_credentials_from_authorization_header() {
        let creds = Credentials::from_authorization_header(Some("Bearer test-token"));
        assert_eq!(creds.jwt_token, Some("test-token".to_string()));

        let creds = Credentials::from_authorization_header(Some("Bearer   "));
        assert!(creds.jwt_token.is_none());

        let creds = Credentials::from_authorization_header(Some("Basic base64"));
        assert!(creds.jwt_token.is_none());

        let creds = Credentials::from_authorization_header(None);
        assert!(creds.jwt_token.is_none());
    }

    #[tokio::test]
    async fn test_claims_creation() {
        let claims = Claims::new(
            "user123".to_string(),
            3600,
            "sprout".to_string(),
            "sprout-api".to_string(),
        );

        assert_eq!(claims.sub, "user123");
        assert!(!claims.jti.is_empty());
        assert!(claims.exp > claims.iat);
        assert!(!claims.is_expired());
    }
}

#[cfg(test)]
mod middleware_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        extract::Extension,
        http::{Request, StatusCode, header},
        middleware,
        routing::get,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::app_state::AppState;
    use crate::error::AppError;
    use crate::knowledge::ResponseSelector;
    use crate::observability::ObservabilityState;
    use crate::security::auth::{Authenticator, Claims, MockAuthenticator};
    use crate::security::middleware::auth_middleware;
    use crate::services::chat::create_chat_service;
    use crate::storage::memory::InMemoryChatHistoryRepository;

    fn app(authenticator: Box<dyn Authenticator>) -> Router {
        let repository = Arc::new(InMemoryChatHistoryRepository::new());
        let state = AppState::new(
            create_chat_service(ResponseSelector::default(), repository.clone(), false),
            authenticator,
            Arc::new(ObservabilityState::new("test".to_string(), repository)),
        );

        Router::new()
            .route(
                "/whoami",
                get(|Extension(claims): Extension<Claims>| async move { claims.sub }),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    fn whoami(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_token_is_verified_once_and_claims_reach_handler() {
        let mut auth = MockAuthenticator::new();
        auth.expect_authenticate()
            .withf(|creds| creds.jwt_token.as_deref() == Some("t0ken"))
            .times(1)
            .returning(|_| {
                Ok(Claims::new(
                    "user7".to_string(),
                    3600,
                    "sprout".to_string(),
                    "sprout-api".to_string(),
                ))
            });
        auth.expect_validate_token().never();

        let response = app(Box::new(auth)).oneshot(whoami(Some("t0ken"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"user7");
    }

    #[tokio::test]
    async fn test_rejected_credentials_return_401() {
        let mut auth = MockAuthenticator::new();
        auth.expect_authenticate()
            .times(1)
            .returning(|_| Err(AppError::Authentication("No token, authorization denied".to_string())));
        auth.expect_validate_token().never();

        let response = app(Box::new(auth)).oneshot(whoami(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
