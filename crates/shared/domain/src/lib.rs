//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! People, sessions and entity types are shared by the people service and the API.

pub mod constants;
pub mod entity_type;
pub mod error;
pub mod password;
pub mod person;
pub mod session;

pub use constants::*;
pub use entity_type::EntityType;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use person::{
    normalize_email, Authorization, LoginOutcome, PasswordUpdate, Person, PersonProfile,
};
pub use session::{SessionCache, SessionData};
