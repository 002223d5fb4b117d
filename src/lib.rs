//! # Institute API
//!
//! Administrative HTTP backend for an educational institute.
//!
//! This library provides a small JSON API over PostgreSQL: course listing and
//! creation, student enrollment lookup, event listing, user login, admissions
//! application submission (with PDF upload), application status management and
//! contact messages. Every endpoint is a direct mapping from an HTTP verb+path
//! to a single parameterized SQL statement.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - CLI and environment configuration
//! - [`error`] - Error taxonomy and centralized HTTP error translation
//! - [`db`] - Connection pool and per-entity repositories
//! - [`models`] - Row and request/response types
//! - [`upload`] - Disk-backed storage for uploaded qualification files
//! - [`server`] - Axum router, handlers and application state
//!
//! ## Example
//!
//! ```rust,no_run
//! use institute_api::{create_router, AppState, RouterConfig, UploadStore};
//! use sqlx::postgres::PgPoolOptions;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = PgPoolOptions::new()
//!         .connect_lazy("postgres://institute@localhost/theotokos_institute")
//!         .expect("valid database url");
//!
//!     let state = AppState::new(pool, UploadStore::new("./uploads"));
//!     let router = create_router(state, RouterConfig::default());
//!
//!     // Serve the router...
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod server;
pub mod upload;

// Re-export commonly used types
pub use config::Config;
pub use db::{
    create_pool, health_check, ApplicationRepository, ContactRepository, CourseRepository,
    EventRepository, UserRepository,
};
pub use error::{ApiError, ErrorResponse};
pub use models::{
    Application, ContactRequest, Course, CreateCourseRequest, Event, LoginRequest, NewApplication,
    PublicUser, UpdateStatusRequest, User,
};
pub use server::{
    create_router, health_handler, login_handler, verify_password, AppState,
    ApplicationQueryParams, EnrollmentQueryParams, HealthResponse, MessageResponse, RouterConfig,
};
pub use upload::{UploadStore, PDF_CONTENT_TYPE};
