//! Entity type listing.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;

use common::AppResult;
use domain::EntityType;

use super::unsupported_method;
use crate::state::AppState;

pub fn entity_type_routes() -> Router<AppState> {
    Router::new().route(
        "/entity_types",
        get(list_entity_types).fallback(unsupported_method),
    )
}

/// List the content model's entity types
#[utoipa::path(
    get,
    path = "/entity_types",
    tag = "Content",
    responses(
        (status = 200, description = "Entity types", body = Vec<EntityType>),
        (status = 404, description = "No entity types defined")
    )
)]
pub async fn list_entity_types(State(state): State<AppState>) -> AppResult<Response> {
    let entity_types: Vec<EntityType> = state.entities.entity_types().await?;

    if entity_types.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(json!({}))).into_response());
    }

    Ok((StatusCode::OK, Json(entity_types)).into_response())
}
