use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

pub mod current_user;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error responses.
///
/// Only `BadRequest` carries text to the client. Authentication failures
/// answer with a bare status so that they give nothing away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Auth(AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Auth(err) => err.into_response(),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmptyUserName
            | UserError::UserNameTaken(_)
            | UserError::RegistrationFailed => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

/// Body shared by login and registration.
///
/// Absent fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CredentialsRequestBody {
    pub user_name: String,
    pub password: String,
}

impl CredentialsRequestBody {
    /// Credentials from a body that may have failed to parse.
    ///
    /// An unreadable body counts as empty credentials, so it fails login and
    /// registration like any other bad input instead of with a parser error.
    pub fn from_payload(payload: Result<Json<Self>, JsonRejection>) -> Self {
        match payload {
            Ok(Json(body)) => body,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable credentials body");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponseData {
    pub access_token: String,
}

/// Sign a fresh access token for a user who just proved who they are.
fn issue_access_token(
    token_codec: &auth::TokenCodec,
    user_name: &str,
    user_id: UserId,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    let claims = auth::Claims::for_user(user_name).with_user_id(user_id.0);

    token_codec
        .issue(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))
        .map(|access_token| {
            ApiSuccess::new(StatusCode::OK, AccessTokenResponseData { access_token })
        })
}
