//! Per-entity repositories.
//!
//! Each repository wraps a clone of the shared [`sqlx::PgPool`] (clones share
//! the underlying pool) and exposes the queries of exactly one entity.

pub mod applications;
pub mod contacts;
pub mod courses;
pub mod events;
pub mod users;

pub use applications::ApplicationRepository;
pub use contacts::ContactRepository;
pub use courses::CourseRepository;
pub use events::EventRepository;
pub use users::UserRepository;
