//! Row and request types for the institute API.
//!
//! Each entity lives in its own module: database rows derive
//! [`sqlx::FromRow`], request bodies derive `serde::Deserialize`. Fields that
//! the external schema allows to be NULL are `Option`s; no coercion or length
//! checks are applied anywhere.

pub mod application;
pub mod contact;
pub mod course;
pub mod event;
pub mod user;

pub use application::{Application, NewApplication, UpdateStatusRequest};
pub use contact::ContactRequest;
pub use course::{Course, CreateCourseRequest};
pub use event::Event;
pub use user::{LoginRequest, PublicUser, User};
