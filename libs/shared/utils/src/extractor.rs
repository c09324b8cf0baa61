use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::{AuthContext, Session};
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Resolves the caller's [`AuthContext`] once and stores it in the request
/// extensions. Requests without a usable token continue as anonymous so that
/// pages can render their login placeholder.
pub async fn auth_context_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let context = resolve_auth_context(&request, &config.jwt_secret);
    request.extensions_mut().insert(context);
    next.run(request).await
}

pub fn resolve_auth_context<B>(request: &Request<B>, jwt_secret: &str) -> AuthContext {
    let token = match bearer_token(request) {
        Some(token) => token,
        None => return AuthContext::Anonymous,
    };

    match validate_token(token, jwt_secret) {
        Ok(user) => AuthContext::Authenticated(Session {
            user,
            token: token.to_string(),
        }),
        Err(e) => {
            debug!("Ignoring bearer token: {}", e);
            AuthContext::Anonymous
        }
    }
}

fn bearer_token<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Actions (as opposed to page views) need a signed-in user.
pub fn require_session(context: &AuthContext) -> Result<&Session, AppError> {
    context
        .session()
        .ok_or_else(|| AppError::Auth("Please log in to continue.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::test_utils::{JwtTestUtils, TestUser};

    const SECRET: &str = "test-secret-key-for-jwt-validation-must-be-long-enough";

    fn request_with(header: Option<String>) -> Request<()> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn test_valid_bearer_is_authenticated() {
        let user = TestUser::doctor_with_id("doc@example.com", 5);
        let token = JwtTestUtils::create_test_token(&user, SECRET, Some(1));

        let context = resolve_auth_context(&request_with(Some(format!("Bearer {}", token))), SECRET);
        let session = context.session().unwrap();
        assert_eq!(session.token, token);
        assert_eq!(session.doctor_id(), Some(5));
    }

    #[test]
    fn test_missing_or_bad_header_is_anonymous() {
        assert!(!resolve_auth_context(&request_with(None), SECRET).is_authenticated());
        assert!(!resolve_auth_context(&request_with(Some("Basic abc".into())), SECRET).is_authenticated());
        assert!(!resolve_auth_context(&request_with(Some("Bearer ".into())), SECRET).is_authenticated());
        assert!(!resolve_auth_context(&request_with(Some("Bearer not.a.jwt".into())), SECRET).is_authenticated());
    }

    #[test]
    fn test_require_session_rejects_anonymous() {
        let err = require_session(&AuthContext::Anonymous).unwrap_err();
        assert_matches!(err, AppError::Auth(_));
    }
}
