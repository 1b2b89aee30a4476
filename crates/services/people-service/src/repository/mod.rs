//! Repository layer for data access.

pub mod entities;
mod entity_type_repository;
mod people_repository;
mod session_repository;

pub use entity_type_repository::{EntityTypeRepository, EntityTypeStore};
pub use people_repository::{PeopleRepository, PeopleStore};
pub use session_repository::{SessionRepository, SessionStore};

#[cfg(any(test, feature = "test-utils"))]
pub use entity_type_repository::MockEntityTypeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use people_repository::MockPeopleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use session_repository::MockSessionRepository;
