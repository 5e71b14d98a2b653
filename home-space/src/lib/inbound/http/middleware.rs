use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticationContext;
use crate::domain::auth::models::Identity;
use crate::inbound::http::router::AppState;

/// Middleware that resolves the caller's identity for every request.
///
/// Never rejects: a missing or bad token only means the request goes on
/// unauthenticated. The result is stored in the request extensions for
/// [`Authenticated`](super::guard::Authenticated) to pick up.
pub async fn resolve_authentication(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let context = resolve_context(&state.token_codec, req.headers());
    req.extensions_mut().insert(context);

    next.run(req).await
}

/// Build the authentication context from the `Authorization` header.
pub fn resolve_context(
    token_codec: &auth::TokenCodec,
    headers: &HeaderMap,
) -> AuthenticationContext {
    let Some(token) = extract_bearer_token(headers) else {
        return AuthenticationContext::Unauthenticated;
    };

    match token_codec.verify(token).map_err(AuthError::from) {
        Ok(claims) => AuthenticationContext::Authenticated(Identity::from(claims)),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring rejected access token");
            AuthenticationContext::Unauthenticated
        }
    }
}

/// Header value with the `Bearer ` prefix stripped when present.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;
    use crate::domain::user::models::UserId;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
    const ISSUER: &str = "http://localhost:7070";

    fn codec() -> auth::TokenCodec {
        auth::TokenCodec::new(SECRET, ISSUER)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header_is_unauthenticated() {
        let context = resolve_context(&codec(), &HeaderMap::new());
        assert_eq!(context, AuthenticationContext::Unauthenticated);
    }

    #[test]
    fn test_valid_bearer_token_is_authenticated() {
        let codec = codec();
        let token = codec
            .issue(&auth::Claims::for_user("alice").with_user_id(4))
            .unwrap();

        let context = resolve_context(&codec, &headers_with(&format!("Bearer {}", token)));

        assert_eq!(
            context,
            AuthenticationContext::Authenticated(Identity {
                user_name: "alice".to_string(),
                user_id: Some(UserId(4)),
            })
        );
    }

    #[test]
    fn test_token_without_prefix_is_accepted() {
        let codec = codec();
        let token = codec.issue(&auth::Claims::for_user("alice")).unwrap();

        let context = resolve_context(&codec, &headers_with(&token));

        assert!(context.is_authenticated());
    }

    #[test]
    fn test_garbage_token_is_unauthenticated() {
        let context = resolve_context(&codec(), &headers_with("Bearer not.a.token"));
        assert_eq!(context, AuthenticationContext::Unauthenticated);
    }

    #[test]
    fn test_empty_bearer_is_unauthenticated() {
        let context = resolve_context(&codec(), &headers_with("Bearer "));
        assert_eq!(context, AuthenticationContext::Unauthenticated);
    }

    #[test]
    fn test_expired_token_is_unauthenticated() {
        let expired = codec().with_lifetime(chrono::Duration::hours(-1));
        let token = expired.issue(&auth::Claims::for_user("alice")).unwrap();

        let context = resolve_context(&codec(), &headers_with(&format!("Bearer {}", token)));

        assert_eq!(context, AuthenticationContext::Unauthenticated);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_unauthenticated() {
        let other = auth::TokenCodec::new(b"another-secret-key-that-is-long-enough!!", ISSUER);
        let token = other.issue(&auth::Claims::for_user("alice")).unwrap();

        let context = resolve_context(&codec(), &headers_with(&format!("Bearer {}", token)));

        assert_eq!(context, AuthenticationContext::Unauthenticated);
    }
}
