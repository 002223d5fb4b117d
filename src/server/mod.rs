//! HTTP server layer for the institute API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          HTTP Layer                              │
//! │        verb+path  ->  handler  ->  one SQL statement             │
//! │                                                                  │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────────────┐   │
//! │  │  handlers   │  │     auth     │  │        routes          │   │
//! │  │ (requests)  │  │ (bcrypt cmp) │  │   (router config)      │   │
//! │  └─────────────┘  └──────────────┘  └────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::verify_password;
pub use handlers::{
    create_course_handler, health_handler, list_applications_handler, list_courses_handler,
    list_enrollments_handler, list_events_handler, login_handler, submit_application_handler,
    submit_contact_handler, update_application_status_handler, AppState, ApplicationQueryParams,
    EnrollmentQueryParams, HealthResponse, MessageResponse,
};
pub use routes::{create_router, RouterConfig};
