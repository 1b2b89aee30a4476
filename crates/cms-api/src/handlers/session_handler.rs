//! Login and logout.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{SessionCache, MSG_CREDENTIALS_REQUIRED, MSG_OK};

use super::{unsupported_method, MessageResponse};
use crate::extractors::ValidatedJson;
use crate::permissions::assert_logged_in;
use crate::session::Session;
use crate::state::AppState;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "Email/username and password are required."),
        length(min = 1, message = "Email/username and password are required.")
    )]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[validate(
        required(message = "Email/username and password are required."),
        length(min = 1, message = "Email/username and password are required.")
    )]
    #[schema(example = "CorrectHorse42")]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The person must change their password before normal access
    pub force_password_change: bool,
}

pub fn session_routes() -> Router<AppState> {
    Router::new().route(
        "/session",
        post(login).delete(logout).fallback(unsupported_method),
    )
}

/// Log in and start a session
#[utoipa::path(
    post,
    path = "/session",
    tag = "Session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 422, description = "Missing or invalid credentials", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(AppError::unprocessable(MSG_CREDENTIALS_REQUIRED));
    };

    let outcome = state
        .people
        .login(email, password)
        .await
        .map_err(AppError::into_unprocessable)?;

    // A new login never reuses the previous session
    if let Some(previous) = session.session_token().await {
        state.sessions.logout(&previous).await?;
    }
    session.regenerate().await?;

    let force_password_change = outcome.user.force_password_change;
    session.set_session_token(outcome.session_token).await;
    session
        .set_cache(SessionCache::for_profile(&outcome.user))
        .await;
    session.save().await?;

    Ok(Json(LoginResponse {
        force_password_change,
    }))
}

/// Log out and destroy the session
#[utoipa::path(
    delete,
    path = "/session",
    tag = "Session",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 422, description = "Not logged in", body = MessageResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<MessageResponse>> {
    let session_token = assert_logged_in(&session)
        .await
        .map_err(AppError::into_unprocessable)?;

    state
        .sessions
        .logout(&session_token)
        .await
        .map_err(AppError::into_unprocessable)?;
    session.destroy().await?;

    Ok(Json(MessageResponse::new(MSG_OK)))
}
