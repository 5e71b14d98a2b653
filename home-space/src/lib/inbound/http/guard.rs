use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticationContext;
use crate::domain::auth::models::Identity;

/// Guard for handlers that require a caller identity.
///
/// Taking `Authenticated` as a handler argument makes the route protected:
/// the handler only runs when the resolver middleware marked the request as
/// authenticated. Otherwise the request is answered with `401` and the
/// handler body is never entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticationContext>() {
            Some(AuthenticationContext::Authenticated(identity)) => {
                Ok(Authenticated(identity.clone()))
            }
            Some(AuthenticationContext::Unauthenticated) => Err(AuthError::Unauthenticated),
            None => {
                tracing::error!(
                    uri = %parts.uri,
                    "No authentication context on request; resolver middleware is not installed"
                );
                Err(AuthError::Unauthenticated)
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::InvalidToken | AuthError::Unauthenticated => {
                StatusCode::UNAUTHORIZED.into_response()
            }
            AuthError::BadCredentials => StatusCode::FORBIDDEN.into_response(),
        }
    }
}
