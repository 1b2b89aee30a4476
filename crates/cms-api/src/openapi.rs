//! OpenAPI documentation.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    OpenApi,
};

use crate::handlers::password_handler::UpdatePasswordRequest;
use crate::handlers::session_handler::{LoginRequest, LoginResponse};
use crate::handlers::MessageResponse;
use domain::EntityType;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::session_handler::login,
        crate::handlers::session_handler::logout,
        crate::handlers::password_handler::update_password,
        crate::handlers::entity_types_handler::list_entity_types,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            UpdatePasswordRequest,
            MessageResponse,
            EntityType,
        )
    ),
    tags(
        (name = "Session", description = "Login, logout and password change"),
        (name = "Content", description = "Content model"),
    )
)]
pub struct ApiDoc;

/// The API document, with the session cookie scheme named after the
/// configured cookie.
pub fn api_doc(cookie_name: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    if let Some(components) = openapi.components.as_mut() {
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(cookie_name))),
        );
    }
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_scheme_uses_configured_cookie() {
        let openapi = api_doc("admin_sid");
        let json = serde_json::to_value(&openapi).unwrap();

        let scheme = &json["components"]["securitySchemes"]["session_cookie"];
        assert_eq!(scheme["in"], "cookie");
        assert_eq!(scheme["name"], "admin_sid");
    }

    #[test]
    fn test_documents_every_endpoint() {
        let json = serde_json::to_value(api_doc("cms_session")).unwrap();
        let paths = &json["paths"];

        assert!(paths["/session"]["post"].is_object());
        assert!(paths["/session"]["delete"].is_object());
        assert!(paths["/me/password"]["put"].is_object());
        assert!(paths["/entity_types"]["get"].is_object());
    }
}
