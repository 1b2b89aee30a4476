//! Route configuration.

use axum::{middleware, Router};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{entity_type_routes, health_routes, password_routes, session_routes};
use crate::openapi::api_doc;
use crate::session::with_session;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes (session loaded for every request)
        .merge(session_routes())
        .merge(password_routes())
        .merge(entity_type_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), with_session))
        // Health check (no session)
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            api_doc(&state.config.session.cookie_name),
        ))
        .with_state(state)
}
