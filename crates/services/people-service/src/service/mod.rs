//! Business logic layer.

mod entity_service;
mod people_service;
mod session_service;

pub use entity_service::{EntityManager, EntityService};
pub use people_service::{PeopleManager, PeopleService};
pub use session_service::{SessionManager, SessionService};
