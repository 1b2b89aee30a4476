//! Password change for the signed-in person.

use axum::{extract::State, response::Json, routing::put, Router};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{
    PasswordUpdate, SessionCache, MSG_LOGIN_REQUIRED, MSG_PASSWORD_CHANGED,
    MSG_PASSWORD_MISMATCH, MSG_PASSWORD_REQUIRED,
};

use super::{unsupported_method, MessageResponse};
use crate::extractors::ValidatedJson;
use crate::permissions::{self, Requirements};
use crate::session::Session;
use crate::state::AppState;

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    pub current_password: Option<String>,
    #[validate(
        required(message = "Password is required."),
        length(min = 1, message = "Password is required.")
    )]
    pub new_password: Option<String>,
    #[validate(
        required(message = "Password is required."),
        length(min = 1, message = "Password is required.")
    )]
    pub confirm_new_password: Option<String>,
}

pub fn password_routes() -> Router<AppState> {
    Router::new().route(
        "/me/password",
        put(update_password).fallback(unsupported_method),
    )
}

/// Change the current person's password
#[utoipa::path(
    put,
    path = "/me/password",
    tag = "Session",
    security(("session_cookie" = [])),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 422, description = "Missing, mismatched or wrong password, or not logged in", body = MessageResponse)
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<UpdatePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(new_password), Some(confirm_new_password)) =
        (payload.new_password, payload.confirm_new_password)
    else {
        return Err(AppError::unprocessable(MSG_PASSWORD_REQUIRED));
    };

    if new_password != confirm_new_password {
        return Err(AppError::unprocessable(MSG_PASSWORD_MISMATCH));
    }

    let session_token =
        permissions::assert(&Requirements::logged_in(), &session, state.sessions.as_ref())
            .await
            .map_err(AppError::into_unprocessable)?
            .ok_or_else(|| AppError::unprocessable(MSG_LOGIN_REQUIRED))?;

    let profile = state
        .people
        .update_password(PasswordUpdate {
            email: payload.email,
            session_token,
            old_password: payload.current_password.unwrap_or_default(),
            new_password,
        })
        .await
        .map_err(AppError::into_unprocessable)?;

    debug!(
        force_password_change = profile.force_password_change,
        "Refreshing session after password change"
    );
    session.set_cache(SessionCache::for_profile(&profile)).await;
    session.save().await?;

    Ok(Json(MessageResponse::new(MSG_PASSWORD_CHANGED)))
}
