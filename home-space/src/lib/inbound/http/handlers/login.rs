use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::issue_access_token;
use super::AccessTokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequestBody;
use crate::domain::auth::errors::AuthError;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    let body = CredentialsRequestBody::from_payload(payload);

    // Unknown user and wrong password must look the same to the client
    let user_id = state
        .user_auth_service
        .authenticate(&body.user_name, &body.password)
        .await
        .ok_or_else(|| {
            tracing::info!(user_name = %body.user_name, "Login rejected");
            AuthError::BadCredentials
        })?;

    tracing::info!(user_name = %body.user_name, user_id = %user_id, "User logged in");

    issue_access_token(&state.token_codec, &body.user_name, user_id)
}
