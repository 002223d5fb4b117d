//! Database access layer.
//!
//! The connection pool is built once at startup ([`create_pool`]) and handed
//! to the repositories through the application state; nothing in this crate
//! reaches for an ambient global. Each repository method issues exactly one
//! parameterized SQL statement.

pub mod pool;
pub mod repositories;

pub use pool::{create_pool, health_check};
pub use repositories::{
    ApplicationRepository, ContactRepository, CourseRepository, EventRepository, UserRepository,
};
