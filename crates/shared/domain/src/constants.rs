//! Domain-level constants.
//!
//! These constants define business rules, defaults and user-facing messages.

// =============================================================================
// Session Cache Defaults
// =============================================================================

/// Entity type the admin UI opens first after login
pub const DEFAULT_ENTITY_TYPE: &str = "Articles";

/// Admin homepage route stored in the session cache
pub const DEFAULT_HOMEPAGE: &str = "/admin";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Messages
// =============================================================================

pub const MSG_CREDENTIALS_REQUIRED: &str = "Email/username and password are required.";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const MSG_LOGIN_REQUIRED: &str = "You must be logged in to perform this action.";
pub const MSG_MISSING_CAPABILITY: &str = "You are not allowed to perform this action.";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required.";
pub const MSG_PASSWORD_MISMATCH: &str = "The password does not match the confirmation password.";
pub const MSG_INCORRECT_PASSWORD: &str = "The current password is incorrect.";
pub const MSG_PASSWORD_CHANGED: &str = "Successfully changed your password.";
pub const MSG_USER_NOT_FOUND: &str = "User not found.";
pub const MSG_OK: &str = "OK";
