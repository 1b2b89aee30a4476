//! Entity type descriptor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A content-model category (e.g. "Articles") shown in the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EntityType {
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
}
