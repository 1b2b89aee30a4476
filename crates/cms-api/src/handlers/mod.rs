//! HTTP handlers, one module per route.

pub mod entity_types_handler;
pub mod health_handler;
pub mod password_handler;
pub mod session_handler;

use axum::http::Method;
use serde::Serialize;
use utoipa::ToSchema;

use common::AppError;

pub use entity_types_handler::entity_type_routes;
pub use health_handler::health_routes;
pub use password_handler::password_routes;
pub use session_handler::session_routes;

/// Plain message response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "OK")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Method fallback shared by every route.
pub async fn unsupported_method(method: Method) -> AppError {
    AppError::UnsupportedMethod(method.to_string())
}
