//! SeaORM entities.

pub mod entity_type;
pub mod person;
pub mod role;
pub mod session;
