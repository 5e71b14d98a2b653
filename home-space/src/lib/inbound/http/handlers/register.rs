use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::issue_access_token;
use super::AccessTokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequestBody;
use crate::inbound::http::router::AppState;

/// Register and log in with the new account in one step.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    let body = CredentialsRequestBody::from_payload(payload);

    let user_id = state
        .user_auth_service
        .register(&body.user_name, &body.password)
        .await?;

    issue_access_token(&state.token_codec, &body.user_name, user_id)
}
