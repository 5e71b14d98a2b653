use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::auth::models::Identity;
use crate::inbound::http::guard::Authenticated;

pub async fn current_user(
    Authenticated(identity): Authenticated,
) -> ApiSuccess<CurrentUserResponseData> {
    ApiSuccess::new(StatusCode::OK, (&identity).into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponseData {
    pub user_name: String,
    pub user_id: Option<i64>,
}

impl From<&Identity> for CurrentUserResponseData {
    fn from(identity: &Identity) -> Self {
        Self {
            user_name: identity.user_name.clone(),
            user_id: identity.user_id.map(|id| id.0),
        }
    }
}
